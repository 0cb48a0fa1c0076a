//! Static subject-specific study tips.
//!
//! Keyed by the exact canonical subject name. New subjects are added as
//! table entries; a subject without an entry renders no tips block.

const PHYSICS: &str = "\
**Key Focus Areas:**
- **Formulas are king**: Memorize all equations (v=u+at, F=ma, E=mc², etc.)
- **Show units**: Always include units in your final answer (m/s, kg, N, J, W)
- **Draw diagrams**: Especially for forces, circuits, and ray diagrams
- **Practice calculations**: Most marks come from numerical problems
- **Understand concepts**: Don't just memorize - understand WHY formulas work

**Common Mistakes to Avoid:**
- Forgetting to convert units (cm to m, minutes to seconds)
- Not showing working steps
- Mixing up series vs parallel circuits
- Wrong formula selection

**Study Technique:**
Do 5-10 past paper calculations DAILY in the last 2 weeks before exams.
";

const CHEMISTRY: &str = "\
**Key Focus Areas:**
- **Periodic table**: Know groups, periods, and common elements by heart
- **Chemical equations**: Practice balancing equations daily
- **Mole calculations**: Master the mole concept (moles = mass/Mr)
- **Practical skills**: Know apparatus and safety procedures
- **Definitions**: Learn all key terms word-for-word

**Common Mistakes to Avoid:**
- Not balancing chemical equations
- Wrong chemical formulas
- Forgetting state symbols (s, l, g, aq)
- Mixing up acids and bases

**Study Technique:**
Create flashcards for all elements, compounds, and chemical tests.
";

const BIOLOGY: &str = "\
**Key Focus Areas:**
- **Diagrams**: Practice drawing and labeling (cell, heart, flower)
- **Life processes**: Understand respiration, photosynthesis, digestion
- **Classification**: Know kingdoms, classes, and examples
- **Practical work**: Understand food tests and microscope use
- **Systems**: Study body systems in detail (circulatory, digestive)

**Common Mistakes to Avoid:**
- Incomplete diagrams (missing labels)
- Confusing respiration with breathing
- Wrong spelling of technical terms
- Not using biological vocabulary

**Study Technique:**
Draw diagrams from memory and compare with the textbook. Repeat until perfect.
";

const MATHEMATICS: &str = "\
**Key Focus Areas:**
- **Show working**: You get marks for method even if the answer is wrong
- **Practice variety**: Do questions from all topics (algebra, geometry, statistics)
- **Time management**: Don't spend too long on one question
- **Check answers**: Use inverse operations to verify
- **Learn theorems**: Pythagoras, area formulas, and similar results

**Common Mistakes to Avoid:**
- Arithmetic errors (use a calculator when allowed)
- Not simplifying answers
- Missing units or wrong units
- Not reading the question carefully

**Study Technique:**
Do at least 3 past papers under timed conditions before the exam.
";

const AGRICULTURE: &str = "\
**Key Focus Areas:**
- **Practical knowledge**: Link theory to real farming practices
- **Crop management**: Know planting, care, and harvesting for major crops
- **Animal husbandry**: Understand feeding, housing, and disease control
- **Soil science**: Soil types, fertility, and conservation
- **Farm tools**: Identify and state uses of various tools

**Common Mistakes to Avoid:**
- Too theoretical - examiners want practical applications
- Not knowing the local Malawian context
- Incomplete answers - give full explanations
- Wrong scientific names

**Study Technique:**
Visit a farm or garden to see concepts in action. Draw and label farm tools.
";

const ENGLISH: &str = "\
**Key Focus Areas:**
- **Grammar**: Tenses, parts of speech, sentence structure
- **Comprehension**: Read passages carefully and answer in full sentences
- **Essay writing**: Plan the structure (introduction, body, conclusion)
- **Vocabulary**: Learn new words daily with their meanings
- **Literature**: Know set books thoroughly (plot, characters, themes)

**Common Mistakes to Avoid:**
- Poor handwriting (illegible writing loses marks)
- Not answering the question asked
- Essays that are too short (aim for 3-4 paragraphs minimum)
- Spelling and grammar errors
- No planning before writing

**Study Technique:**
Write one practice essay per week and have someone read it for feedback.
";

const ENGLISH_LITERATURE: &str = "\
**Key Focus Areas:**
- **Set books**: Read each set text at least twice
- **Characters**: Know how each main character changes and why
- **Themes**: Link every theme to specific scenes
- **Quotations**: Memorize short quotations you can use as evidence
- **Context**: Understand when and where each text is set

**Common Mistakes to Avoid:**
- Retelling the story instead of answering the question
- Making claims without evidence from the text
- Confusing characters or events between set books
- Ignoring the marks allocated to each part

**Study Technique:**
Build a one-page summary per set book: plot, characters, themes, and quotations.
";

const GEOGRAPHY: &str = "\
**Key Focus Areas:**
- **Map work**: Practice scale, direction, and grid references
- **Physical geography**: Landforms, climate, weather, vegetation
- **Human geography**: Population, settlement, economic activities
- **Environmental issues**: Conservation, pollution, climate change
- **Diagrams**: Draw and label river features and population pyramids

**Common Mistakes to Avoid:**
- Poor map drawing skills
- Confusing latitude and longitude
- Not using geographical vocabulary
- Vague answers - be specific

**Study Technique:**
Use real maps and atlases. Practice drawing sketches of geographic features.
";

const HISTORY: &str = "\
**Key Focus Areas:**
- **Dates and events**: Memorize key dates and what happened
- **Cause and effect**: Understand WHY events happened
- **Key figures**: Know important people and their roles
- **Timelines**: Understand chronological order
- **Sources**: Practice interpreting historical documents

**Common Mistakes to Avoid:**
- Wrong dates
- Not explaining the significance of events
- Answers that are too brief - elaborate with details
- Mixing up different historical periods
- Not using historical evidence

**Study Technique:**
Create timelines for each topic. Use mnemonics for remembering dates.
";

const LIFE_SCIENCE: &str = "\
**Key Focus Areas:**
- **Living organisms**: Cells, tissues, organs, systems
- **Ecology**: Food chains, ecosystems, environmental issues
- **Human biology**: Health, disease, reproduction
- **Practical skills**: Experiments, observations, data recording
- **Classification**: Identifying organisms

**Common Mistakes to Avoid:**
- Incomplete diagrams
- Not learning scientific names
- Confusing similar concepts
- Poor labeling

**Study Technique:**
Make detailed drawings of all biological structures from memory.
";

const PHYSICAL_SCIENCE: &str = "\
**Key Focus Areas:**
- **Physics and Chemistry combined**: Study both thoroughly
- **Practical experiments**: Understand procedures and results
- **Calculations**: Practice numerical problems daily
- **Scientific method**: Understand hypothesis, experiment, conclusion
- **Safety**: Know lab safety rules

**Common Mistakes to Avoid:**
- Weak in one area (physics or chemistry) - study both equally
- Not showing calculations
- Poor practical write-ups
- Forgetting units

**Study Technique:**
Split study time equally between physics and chemistry topics.
";

/// Subject name to tips text.
pub const SUBJECT_TIPS: &[(&str, &str)] = &[
    ("Physics", PHYSICS),
    ("Chemistry", CHEMISTRY),
    ("Biology", BIOLOGY),
    ("Mathematics", MATHEMATICS),
    ("Agriculture", AGRICULTURE),
    ("English", ENGLISH),
    ("English Literature", ENGLISH_LITERATURE),
    ("Geography", GEOGRAPHY),
    ("History", HISTORY),
    ("Life Science", LIFE_SCIENCE),
    ("Physical Science", PHYSICAL_SCIENCE),
];

/// Tips for an exact canonical subject name.
pub fn subject_tips(subject: &str) -> Option<&'static str> {
    SUBJECT_TIPS
        .iter()
        .find(|(name, _)| *name == subject)
        .map(|(_, tips)| *tips)
}
