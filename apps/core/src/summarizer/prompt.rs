//! Prompt construction for an external summary provider.

use serde::{Deserialize, Serialize};

use crate::guide::ExamLevel;

pub const SYSTEM_PROMPT: &str = "\
You are an expert MANEB (Malawi National Examinations Board) exam tutor with deep knowledge of:
- MANEB JCE (Junior Certificate of Education) and MSCE (Malawi School Certificate of Education) exam formats
- Malawian curriculum standards and learning objectives
- Common exam question patterns and marking schemes
- Key topics frequently tested in MANEB examinations

Your goal is to help students understand the examination format, master the key concepts that
appear repeatedly, learn exam-specific answering techniques and practise with realistic questions.

You must provide PRACTICAL, ACTIONABLE revision notes that directly help students score better marks.";

const STRICT_SUFFIX: &str = "
IMPORTANT: The previous attempt was too generic or too short. Provide:
- At least 2000 words of detailed content
- Specific exam techniques and strategies
- Real practice questions
- A clear, structured format with headings
- Actionable advice students can use immediately
";

/// One request to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    /// Set on the retry after a low-quality answer.
    pub strict: bool,
}

/// Inputs for [`build_prompt`].
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub corpus: &'a str,
    /// Optional textbook excerpt to ground the notes
    pub reference_text: Option<&'a str>,
    pub subject: Option<&'a str>,
    pub level: ExamLevel,
}

/// Build the provider request for `input`. `strict` appends the stricter demands used on retry.
pub fn build_prompt(input: &PromptInput<'_>, strict: bool) -> SummaryRequest {
    let subject_info = input
        .subject
        .map(|s| format!(" for {}", s))
        .unwrap_or_default();

    let mut user_prompt = format!(
        "# TASK: Create Comprehensive {level} Exam Revision Notes{subject}\n\n\
         Level: {level} ({level_name})\n\n\
         ## EXAM PAPERS PROVIDED:\n{corpus}\n\n",
        level = input.level.label(),
        level_name = input.level.full_name(),
        subject = subject_info,
        corpus = input.corpus,
    );

    if let Some(reference) = input.reference_text.filter(|r| !r.trim().is_empty()) {
        user_prompt.push_str(&format!(
            "## TEXTBOOK REFERENCE MATERIAL:\n{}\n\n",
            reference
        ));
    }

    user_prompt.push_str(
        "## REQUIRED OUTPUT FORMAT:\n\n\
         ### 1. EXAM OVERVIEW\n\
         - Exam format and structure, question types, time allocation, marking patterns\n\n\
         ### 2. KEY TOPICS & CONCEPTS\n\
         - For each topic: importance, core concepts, definitions and formulas, misconceptions, typical questions\n\n\
         ### 3. DETAILED REVISION NOTES\n\
         - Clear explanations, step-by-step approaches, memory aids, links between concepts\n\n\
         ### 4. EXAM TECHNIQUES & TIPS\n\
         - Approaching each question type, time management, what examiners look for, common mistakes\n\n\
         ### 5. PRACTICE QUESTIONS\n\
         - 5-8 exam-style practice questions of varied difficulty with brief answer guidelines\n\n\
         ### 6. STUDY PLAN RECOMMENDATION\n\
         - Estimated study time, priority topics, suggested revision sequence\n\n\
         Use simple, clear language, bullet points and headings. Include specific examples from the papers provided.\n",
    );

    if strict {
        user_prompt.push_str(STRICT_SUFFIX);
    }

    SummaryRequest {
        system_prompt: SYSTEM_PROMPT.to_string(),
        user_prompt,
        strict,
    }
}
