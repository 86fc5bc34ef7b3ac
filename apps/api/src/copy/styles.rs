//! Style catalog — named copywriting voices mapped to one-line descriptors.
//!
//! Descriptors are cosmetic: they only appear in the style-attribution line
//! of generated body copy. Unknown style names fall back to a generic label
//! rather than erroring, so the generator stays total.

/// Descriptor used when a style name is not in the catalog.
pub const FALLBACK_DESCRIPTOR: &str = "conversion-focused";

/// The master style catalog, in menu order.
pub const MASTER_STYLES: &[(&str, &str)] = &[
    (
        "Gary Halbert",
        "raw, emotional hooks (greed/fear/curiosity), short punchy lines, story lead-ins",
    ),
    (
        "David Ogilvy",
        "benefit-first, specific proof, facts, and strong subheads",
    ),
    (
        "Dan Kennedy",
        "no-BS direct response, deadlines, risk reversal, clear offer",
    ),
    (
        "Claude Hopkins",
        "self-interest, testable claims, unique mechanism/USP",
    ),
    (
        "Joe Sugarman",
        "slippery-slide curiosity, sensory detail, axioms of trust",
    ),
    (
        "Eugene Schwartz",
        "awareness stages aligned to market desire, breakthrough promise",
    ),
    (
        "John Carlton",
        "killer hooks, urgency, vivid storytelling, exclusivity",
    ),
    (
        "Robert Bly",
        "4 U's (Urgent, Unique, Useful, Ultra-specific), long-form structure",
    ),
    (
        "Neville Medhora",
        "simple, scannable, problem→solution→proof",
    ),
    (
        "Joanna Wiebe",
        "voice-of-customer, message mining, test-ready copy",
    ),
    ("Hybrid Mix", "blend of the above tuned to conversion"),
];

/// Looks up the descriptor for a style name, falling back for unknown names.
pub fn descriptor_for(style: &str) -> &'static str {
    MASTER_STYLES
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, descriptor)| *descriptor)
        .unwrap_or(FALLBACK_DESCRIPTOR)
}
