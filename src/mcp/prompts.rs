//! Prompt templates exposed over MCP.

use std::collections::HashMap;

/// Name of the literature review prompt
pub const SEARCH_PROMPT_NAME: &str = "search_biology_papers";

/// Render the literature review prompt for `topic`.
pub fn search_biology_papers(topic: &str) -> String {
    format!(
        r#"
You are an expert in biological and medical research. Find and analyze recent biology research papers related to the topic below.

User question: {topic}

Follow these steps:

1. Build the search query:
   - Analyze the user's question and construct a suitable query for the Europe PMC API.
   - The Europe PMC API supports the following syntax:
     * Field qualifiers: TITLE, ABSTRACT, AUTHOR, etc.
     * Boolean operators: AND, OR, NOT
     * Phrase search: "enclose in double quotes"
     * Date ranges: FIRST_PDATE:[YYYY-MM-DD TO YYYY-MM-DD]
     * Note: the wildcard "*" cannot be used. Use complete words.
     * Example: (TITLE:"virus" OR ABSTRACT:"viral") AND (ABSTRACT:"metagenome" OR ABSTRACT:"metagenomic") AND (FIRST_PDATE:[2020-01-01 TO 2025-12-31])
   - To restrict the search to peer-reviewed papers, add (SRC:MED OR SRC:PMC).
   - Write a specific, detailed query and explain what it searches for and why.

2. Run the paper search:
   - Run the query with the search_european_pmc tool.
   - Analyze the high-quality papers in the results that include abstracts.

3. Synthesize the results and write the answer:
   - Integrate and analyze the papers found and write a comprehensive answer to the user's question.
   - The answer should cover:
     * A comparison of the main methodologies and approaches
     * Key findings and the current consensus
     * Practical applications
     * Future research directions
     * A comparison of conflicting views or methods, where they exist
   - Cite papers in the text by author and year (e.g. Smith et al., 2023).
   - Keep the answer scientifically accurate, expert, and easy to follow.

4. Explain the search method:
   - Briefly describe the query you used and why you built it that way.

5. Reference list:
   - Always end the answer with a "References" section containing complete information for every cited paper.
   - Format each entry as:
     * Authors (Year). Title. Journal, Volume(Issue), Pages. DOI: xxx
   - Always include the DOI when one is available.
   - Numbering the references makes them easier to follow from the text.

Base the answer on recent research and keep it scientifically accurate.
"#
    )
}

/// Render the literature review prompt from MCP prompt arguments.
pub fn render(args: &HashMap<String, String>) -> Result<String, String> {
    let topic = args
        .get("topic")
        .ok_or("Missing 'topic' argument")?;
    Ok(search_biology_papers(topic))
}
