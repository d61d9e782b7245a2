//! Embedded sample texts analysed when no `--text` is given.

/// Sample corpus: one positive review with a name, place and phone number,
/// one negative review, and one neutral remark carrying an email and an SSN.
pub const SAMPLE_TEXTS: &[&str] = &[
    "I love this new product! It's absolutely amazing and works perfectly. John Smith from New York called me at 555-123-4567.",
    "This service is terrible. I'm very disappointed and frustrated with the poor quality.",
    "The weather today is nice. My email is john.doe@example.com and my SSN is 123-45-6789.",
];
