//! Prakriti classification over an ordered answer sequence.

use crate::models::Dosha;

/// Classify an answer sequence into its dominant dosha.
///
/// Tallies per-category counts and picks the maximum. Ties resolve by the
/// fixed priority order vata > pitta > kapha. The function is pure and
/// total: any input, including an empty one (where all counts tie at zero
/// and the priority rule yields vata), maps to exactly one category, and
/// identical inputs always map to identical outputs.
pub fn classify(answers: &[Dosha]) -> Dosha {
    let mut vata = 0usize;
    let mut pitta = 0usize;
    let mut kapha = 0usize;

    for answer in answers {
        match answer {
            Dosha::Vata => vata += 1,
            Dosha::Pitta => pitta += 1,
            Dosha::Kapha => kapha += 1,
        }
    }

    // Strictly-greater comparison keeps earlier priorities on ties.
    let mut dominant = Dosha::Vata;
    let mut best = vata;
    if pitta > best {
        dominant = Dosha::Pitta;
        best = pitta;
    }
    if kapha > best {
        dominant = Dosha::Kapha;
    }
    dominant
}
