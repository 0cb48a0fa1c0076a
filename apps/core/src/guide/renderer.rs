//! Study-guide renderer.
//!
//! Pure function from an [`AnalysisRecord`] and a [`GuideContext`] to guide
//! text. Output sticks to the Markdown subset the exporters understand:
//! `#`/`##`/`###` headings, `**bold**` spans, `- ` bullets and `---` rules.
//! Sections without data are omitted; the overview and closing blocks are
//! always present, so the result is never empty.

use super::context::GuideContext;
use super::question_kind::QuestionKind;
use super::subject_tips::subject_tips;
use crate::analysis::AnalysisRecord;

const RULE: &str = "---\n\n";
const KEYWORDS_PER_TOPIC: usize = 3;
const MIN_SUMMARY_LEN: usize = 100;
const MIN_KEY_TERMS: usize = 3;
const MAX_PLANNED_QUESTIONS: usize = 20;

/// Resolved values every section reads.
struct View<'a> {
    record: &'a AnalysisRecord,
    subject: &'a str,
    level: &'static str,
    title: String,
}

/// Render `record` as a study guide.
pub fn render(record: &AnalysisRecord, context: &GuideContext) -> String {
    let subject = context.effective_subject(record.subject.as_deref());
    let view = View {
        record,
        subject,
        level: context.effective_level().label(),
        title: record
            .title
            .clone()
            .unwrap_or_else(|| format!("{} Exam Paper", subject)),
    };

    let mut out = String::new();
    overview(&mut out, &view);
    topics(&mut out, &view);
    questions(&mut out, &view);
    content_summary(&mut out, &view);
    strategy(&mut out, &view);
    answering(&mut out);
    key_terms(&mut out, &view);
    subject_block(&mut out, &view);
    exam_day(&mut out);
    how_to_use(&mut out, &view);
    closing(&mut out, &view);
    out
}

fn overview(out: &mut String, view: &View<'_>) {
    let record = view.record;
    out.push_str(&format!("# {}\n\n", view.title));
    out.push_str("## DOCUMENT OVERVIEW\n\n");
    out.push_str(&format!("**Subject:** {}\n", view.subject));
    out.push_str(&format!(
        "**Level:** {} (Malawi National Examinations Board)\n",
        view.level
    ));
    out.push_str(&format!(
        "**Content Length:** {} pages\n",
        record.estimated_pages()
    ));
    out.push_str(&format!(
        "**Key Topics Found:** {} main topics\n",
        record.topics.len()
    ));
    out.push_str(&format!(
        "**Exam Questions:** {} questions identified\n",
        record.question_count
    ));
    out.push_str(&format!(
        "**Important Terms:** {} key concepts\n\n",
        record.keywords.len()
    ));
    out.push_str(RULE);
}

/// Keywords sharing a word with the topic, by substring containment either way.
fn related_keywords<'a>(topic: &str, keywords: &'a [String]) -> Vec<&'a str> {
    let topic_words: Vec<String> = topic
        .to_lowercase()
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    keywords
        .iter()
        .filter(|kw| {
            let kw = kw.to_lowercase();
            topic_words
                .iter()
                .any(|tw| kw.contains(tw.as_str()) || tw.contains(kw.as_str()))
        })
        .take(KEYWORDS_PER_TOPIC)
        .map(String::as_str)
        .collect()
}

fn topics(out: &mut String, view: &View<'_>) {
    let record = view.record;
    if record.topics.is_empty() {
        return;
    }

    out.push_str("## MAIN TOPICS TO STUDY\n\n");
    for (index, topic) in record.topics.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n\n", index + 1, topic));

        let related = related_keywords(topic, &record.keywords);
        if !related.is_empty() {
            out.push_str(&format!("**Key Terms:** {}\n\n", related.join(", ")));
        }

        out.push_str("**Study Focus:**\n");
        out.push_str("- Understand the core concepts and definitions\n");
        out.push_str("- Review examples from your textbook\n");
        out.push_str("- Practice explaining this topic in your own words\n");
        out.push_str("- Connect this topic to other related concepts\n\n");
    }
    out.push_str(RULE);
}

fn questions(out: &mut String, view: &View<'_>) {
    let record = view.record;
    if record.questions.is_empty() {
        return;
    }

    out.push_str("## EXAM QUESTIONS & STUDY GUIDE\n\n");
    out.push_str("Study these questions from your exam paper. For each question:\n");
    out.push_str("1. Try to answer it yourself first\n");
    out.push_str("2. Check your textbook for the correct answer\n");
    out.push_str("3. Write down the answer in your own words\n");
    out.push_str("4. Practice similar questions\n\n");

    for (index, question) in record.questions.iter().enumerate() {
        let kind = QuestionKind::classify(question);
        out.push_str(&format!("**Q{}.** {}\n\n", index + 1, question));
        out.push_str(&format!("**Study Tip:** {}\n\n", kind.study_tip()));
    }

    out.push_str("**How to Use These Questions:**\n");
    out.push_str("- Cover the page and try to answer each question from memory\n");
    out.push_str("- Time yourself - spend about 2 minutes per mark allocated\n");
    out.push_str("- Check your answers against your textbook\n");
    out.push_str("- Rewrite any answers you got wrong\n");
    out.push_str("- Repeat until you can answer all questions correctly\n\n");
    out.push_str(RULE);
}

fn content_summary(out: &mut String, view: &View<'_>) {
    let summary = &view.record.content_summary;
    if summary.chars().count() <= MIN_SUMMARY_LEN {
        return;
    }

    out.push_str("## CONTENT SUMMARY\n\n");
    out.push_str(summary);
    out.push_str("\n\n");
    out.push_str("This is an excerpt from your uploaded document to give you context.\n\n");
    out.push_str(RULE);
}

fn strategy(out: &mut String, view: &View<'_>) {
    let record = view.record;
    out.push_str("## EXAM PREPARATION STRATEGY\n\n");
    out.push_str("### Time Management\n\n");

    out.push_str("**Week 1: Foundation Building**\n");
    out.push_str(&format!(
        "- Review all {} key topics identified above\n",
        record.topics.len()
    ));
    out.push_str("- Make summary notes for each topic\n");
    out.push_str("- Focus on understanding concepts, not memorization\n");
    out.push_str(&format!(
        "- Practice {} questions\n\n",
        record.question_count.min(MAX_PLANNED_QUESTIONS)
    ));

    out.push_str("**Week 2: Practice & Application**\n");
    out.push_str("- Complete past paper questions under timed conditions\n");
    out.push_str("- Identify weak areas and focus extra time there\n");
    out.push_str("- Practice explaining concepts in your own words\n");
    out.push_str("- Form study groups to discuss difficult topics\n\n");

    out.push_str("**Week 3: Revision & Confidence**\n");
    out.push_str("- Quick review of all key formulas and definitions\n");
    out.push_str("- Focus on high-yield topics (those appearing most frequently)\n");
    out.push_str("- Get adequate sleep - don't cram the night before\n");
    out.push_str("- Arrive at the exam hall early and stay calm\n\n");
}

fn answering(out: &mut String) {
    out.push_str("### How to Answer MANEB Questions\n\n");
    out.push_str("**1. Read Carefully**\n");
    out.push_str("- Read the question twice before answering\n");
    out.push_str("- Identify command words (explain, describe, calculate, compare)\n");
    out.push_str("- Note the marks allocated (shows how much detail is needed)\n\n");

    out.push_str("**2. Show Your Working**\n");
    out.push_str("- Always write down formulas before calculating\n");
    out.push_str("- Show every step of your working\n");
    out.push_str("- Include units in your final answer\n");
    out.push_str("- You get marks for method even if the answer is wrong\n\n");

    out.push_str("**3. Time Management**\n");
    out.push_str("- Spend time proportional to marks (2 marks = 2 minutes)\n");
    out.push_str("- If stuck, move on and come back later\n");
    out.push_str("- Leave 15 minutes at the end to review\n\n");
    out.push_str(RULE);
}

fn key_terms(out: &mut String, view: &View<'_>) {
    let keywords = &view.record.keywords;
    if keywords.len() < MIN_KEY_TERMS {
        return;
    }

    out.push_str("## KEY TERMS TO MASTER\n\n");
    out.push_str(
        "These terms appear frequently in your document. Make sure you understand each one:\n\n",
    );
    for keyword in keywords {
        out.push_str(&format!("- **{}**\n", keyword));
    }

    out.push_str("\n**Study Method:**\n");
    out.push_str("1. Create flashcards for each term\n");
    out.push_str("2. Write the definition on the back\n");
    out.push_str("3. Test yourself daily\n");
    out.push_str("4. Use each term in a sentence\n\n");
    out.push_str(RULE);
}

fn subject_block(out: &mut String, view: &View<'_>) {
    let Some(tips) = subject_tips(view.subject) else {
        return;
    };

    out.push_str(&format!(
        "## {}-SPECIFIC STUDY TIPS\n\n",
        view.subject.to_uppercase()
    ));
    out.push_str(tips);
    out.push('\n');
    out.push_str(RULE);
}

fn exam_day(out: &mut String) {
    out.push_str("## EXAM DAY CHECKLIST\n\n");
    out.push_str("**Night Before:**\n");
    out.push_str("- Light revision only (key formulas, definitions)\n");
    out.push_str("- Prepare all materials (pens, calculator, ID, admission letter)\n");
    out.push_str("- Get 7-8 hours of sleep\n");
    out.push_str("- Eat a good breakfast\n\n");

    out.push_str("**At the Exam Hall:**\n");
    out.push_str("- Arrive 30 minutes early\n");
    out.push_str("- Stay calm and confident\n");
    out.push_str("- Read ALL questions before starting\n");
    out.push_str("- Start with questions you're most confident about\n");
    out.push_str("- Manage your time strictly\n\n");

    out.push_str("**During the Exam:**\n");
    out.push_str("- Write legibly - examiners can't mark what they can't read\n");
    out.push_str("- Answer all questions - blank = 0 marks\n");
    out.push_str("- Show all working for calculations\n");
    out.push_str("- Check your answers if time remains\n");
    out.push_str("- Don't panic if others finish before you\n\n");
    out.push_str(RULE);
}

fn how_to_use(out: &mut String, view: &View<'_>) {
    let record = view.record;
    out.push_str("## HOW TO USE THIS STUDY GUIDE\n\n");

    out.push_str("**Step 1: Understand the Topics**\n");
    out.push_str(&format!(
        "- Read through each of the {} topics listed above\n",
        record.topics.len()
    ));
    out.push_str("- Make notes in your own words\n");
    out.push_str("- Highlight anything you don't understand\n\n");

    out.push_str("**Step 2: Practice the Questions**\n");
    if record.question_count > 0 {
        out.push_str(&format!(
            "- Try to answer all {} questions without looking at your notes\n",
            record.question_count
        ));
    } else {
        out.push_str("- Create your own practice questions based on the topics\n");
    }
    out.push_str("- Check your answers against your textbook\n");
    out.push_str("- Rewrite any wrong answers\n\n");

    out.push_str("**Step 3: Master the Terms**\n");
    if !record.keywords.is_empty() {
        out.push_str(&format!(
            "- Learn all {} key terms\n",
            record.keywords.len()
        ));
    }
    out.push_str("- Make flashcards for quick review\n");
    out.push_str("- Test yourself daily\n\n");

    out.push_str("**Step 4: Review Regularly**\n");
    out.push_str("- Review this guide every 3 days\n");
    out.push_str("- Focus on weak areas\n");
    out.push_str("- Practice explaining concepts to others\n\n");
    out.push_str(RULE);
}

fn closing(out: &mut String, view: &View<'_>) {
    out.push_str("## FINAL TIPS\n\n");
    out.push_str("- **Study actively** - Write notes, don't just read\n");
    out.push_str("- **Practice regularly** - 30 minutes daily beats 5 hours once\n");
    out.push_str("- **Test yourself** - Use the questions above\n");
    out.push_str("- **Ask for help** - If you don't understand something\n");
    out.push_str("- **Stay confident** - You've already started preparing!\n\n");
    out.push_str(&format!("Good luck with your {} studies!\n\n", view.subject));
    out.push_str(RULE);
    out.push_str("**Generated by MANEB Exam Prep - Helping Malawian students study smarter**\n");
}
