//! Test Module
//!
//! Cross-module test suite for the exam notes pipeline.
//!
//! ## Test Categories
//! - `analysis_tests`: extractor behavior, bounds and determinism
//! - `guide_tests`: rendered guide structure and subject tips
//! - `summarizer_tests`: provider gating, retry and fallback
//! - `config_tests`: environment-driven configuration
//! - `integration_tests`: full paper to guide workflows, file I/O

pub mod summarizer_tests;

/// A short MSCE physics paper used across the suites.
pub(crate) const SAMPLE_PAPER: &str = "\
MALAWI NATIONAL EXAMINATIONS BOARD
2023 MSCE EXAMINATIONS
PHYSICS
Paper I (100 marks)
Time Allowed: 2 hours

INSTRUCTIONS
Answer all questions in Section A and any two in Section B.

SECTION A: MECHANICS AND MOTION

1. (a) What is velocity?
(b) State Newton's first law of motion?
2. Calculate the acceleration of a car that moves from rest to 20 m/s in 5 seconds?
3. Explain why a passenger jerks forward when a bus stops suddenly?

Newton showed that a body remains at rest or in uniform motion unless acted upon by a resultant force. Newton called this property inertia, and Newton linked it to the mass of the body in every case.

SECTION B: ELECTRICITY AND MAGNETISM

4. Define electric current and give its SI unit?
5. Describe an experiment to verify that current is proportional to voltage?

Current flows through a metallic conductor in proportion to the potential difference across it. This relationship holds only when the temperature and other physical conditions remain constant throughout the experiment.
";
