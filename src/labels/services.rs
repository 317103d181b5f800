use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::meals::dto::MealRequest;

const SCANNED_NAME: &str = "Scanned Label";
const KJ_PER_KCAL: f64 = 4.184;

lazy_static! {
    static ref PROTEIN_RE: Regex = Regex::new(r"protein[^0-9]*(\d+(?:[.,]\d+)?)").unwrap();
    static ref CARBS_RE: Regex =
        Regex::new(r"(?:carbohydrates?|total carbs?)[^0-9]*(\d+(?:[.,]\d+)?)").unwrap();
    static ref FAT_RE: Regex = Regex::new(r"total fat[^0-9]*(\d+(?:[.,]\d+)?)").unwrap();
    static ref KCAL_RE: Regex = Regex::new(r"(\d+(?:[.,]\d+)?)\s?kcal").unwrap();
    static ref KJ_RE: Regex = Regex::new(r"(\d+(?:[.,]\d+)?)\s?kj").unwrap();
    static ref CALORIES_RE: Regex = Regex::new(r"calories[^0-9]*(\d+(?:[.,]\d+)?)").unwrap();
}

/// Lowercases and folds to ASCII so accented labels match plain keywords.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().nfkd().filter(char::is_ascii).collect()
}

/// Builds a one-serving meal request from nutrition label text.
/// Anything the label does not mention reads as zero.
pub fn parse_label(text: &str) -> MealRequest {
    let text = normalize(text);
    MealRequest {
        name: SCANNED_NAME.into(),
        protein_per_serving: first_number(&PROTEIN_RE, &text).unwrap_or(0.0),
        carbs_per_serving: first_number(&CARBS_RE, &text).unwrap_or(0.0),
        fat_per_serving: first_number(&FAT_RE, &text).unwrap_or(0.0),
        calories_per_serving: calories(&text),
        servings: 1.0,
    }
}

fn calories(text: &str) -> f64 {
    if let Some(kcal) = first_number(&KCAL_RE, text) {
        return kcal;
    }
    if let Some(kj) = first_number(&KJ_RE, text) {
        return (kj / KJ_PER_KCAL * 100.0).round() / 100.0;
    }
    first_number(&CALORIES_RE, text).unwrap_or(0.0)
}

fn first_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().replace(',', ".").parse().ok())
}
