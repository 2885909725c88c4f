use log::info;

use crate::services::llm_service::{GenerationError, SummaryGenerator};

/// Wraps the transcript and the user's instruction in the analyst prompt.
///
/// Lines ending in two spaces are markdown hard breaks and are kept as-is.
pub fn build_summary_prompt(transcript: &str, prompt: &str) -> String {
    format!(
        concat!(
            "You are an expert analyst. Read the transcript below and generate a **clean, structured, human-like summary**. ",
            "Do **not** include introductory phrases like \"This transcript provides...\".  \n",
            "\n",
            "Instructions:  \n",
            "1. Extract main topics as **headings**.  \n",
            "2. Under each heading, give:  \n",
            "   - **Short definition or explanation** (1–2 sentences max).  \n",
            "   - **Concise bullet points** highlighting actionable or important details.  \n",
            "3. Keep language natural, like explaining to a colleague.  \n",
            "4. Skip any unnecessary filler.  \n",
            "5. Make it skimmable and clear.\n",
            "\n",
            "Transcript:  \n",
            "{}\n",
            "\n",
            "User instruction / focus:  \n",
            "{}\n",
            "\n",
        ),
        transcript, prompt
    )
}

pub async fn summarize(
    generator: &dyn SummaryGenerator,
    transcript: &str,
    prompt: &str,
) -> Result<String, GenerationError> {
    let full_prompt = build_summary_prompt(transcript, prompt);
    let summary = generator.generate(&full_prompt).await?;
    info!("Generated summary of {} chars", summary.len());
    Ok(summary)
}
