//! Variant Generator — fills five fixed headline templates and one shared
//! AIDA body from an ad brief. No randomness: identical briefs always yield
//! identical output.

use serde::{Deserialize, Serialize};

use crate::copy::styles::descriptor_for;

/// Substituted when the brief's audience is empty.
pub const DEFAULT_AUDIENCE: &str = "someone who needs this";
/// Substituted when the brief's benefit is empty.
pub const DEFAULT_BENEFIT: &str = "get real results without the struggle";

/// One generated headline + body candidate for a classified ad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdVariant {
    pub headline: String,
    pub body: String,
}

/// Inputs for one generation run. The handler validates product/benefit are
/// non-empty before building a brief; the generator itself only defaults
/// audience and benefit.
#[derive(Debug, Clone)]
pub struct AdBrief {
    pub product: String,
    pub benefit: String,
    pub audience: String,
    pub style: String,
    pub body_extra: String,
}

/// Generates exactly five ad variants from a brief.
///
/// All five headlines mention the product. The body is shared across
/// variants: a style-attribution line followed by labeled ATTENTION /
/// INTEREST / DESIRE / ACTION sections, with any non-empty support text
/// appended after a blank line.
pub fn make_variants(brief: &AdBrief) -> Vec<AdVariant> {
    let audience = non_empty_or(&brief.audience, DEFAULT_AUDIENCE);
    let benefit = non_empty_or(&brief.benefit, DEFAULT_BENEFIT);
    let short_b = short_benefit(benefit);
    let product = brief.product.as_str();

    let headlines = [
        format!(
            "Finally: {product} That Helps You {} — Without The Struggle",
            capitalize_first(short_b)
        ),
        format!(
            "How {} Can {short_b} with {product}",
            capitalize_first(audience)
        ),
        format!("{product}: The “{short_b}” Shortcut You Can Start Using Today"),
        format!("Do You Make These Mistakes When Trying to {short_b}? {product} Can Fix That"),
        format!("{product}: The Hidden Shortcut to {short_b} No One Told You About"),
    ];

    let mut body = build_body(product, audience, short_b, &brief.style);
    let extra = brief.body_extra.trim();
    if !extra.is_empty() {
        body.push_str("\n\n");
        body.push_str(extra);
    }

    headlines
        .into_iter()
        .map(|headline| AdVariant {
            headline,
            body: body.clone(),
        })
        .collect()
}

/// Shared AIDA body text. `short_b` is interpolated lower-cased inside prose
/// sentences and as-is in the DESIRE bullet list.
fn build_body(product: &str, audience: &str, short_b: &str, style: &str) -> String {
    let descriptor = descriptor_for(style);
    let short_lower = short_b.to_lowercase();

    format!(
        "[{style}-inspired tone – {descriptor}]\n\
         \n\
         ATTENTION\n\
         If you're {audience}, you're not alone. Most attempts to {short_lower} fail \
         because of confusing advice and copy that doesn't speak to what you actually want.\n\
         \n\
         INTEREST\n\
         **{product}** is built to change that. It leads with the one thing you care \
         about: {short_lower} (backed by a clear, simple path).\n\
         \n\
         DESIRE\n\
         • {short_b}\n\
         • Save time and guesswork\n\
         • See real progress you can feel\n\
         \n\
         ACTION\n\
         Click to get started now. Limited attention = limited action. Act while it's \
         top of mind."
    )
}

/// Truncates a benefit at the first literal `(` and trims whitespace.
/// Parenthetical qualifiers are dropped from headline use by policy.
pub fn short_benefit(benefit: &str) -> &str {
    benefit
        .split('(')
        .next()
        .unwrap_or(benefit)
        .trim()
}

/// Upper-cases the first character, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}
