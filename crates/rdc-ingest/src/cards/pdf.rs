//! Text extraction and row parsing for the card details PDF
//!
//! The PDF renders one table spread over many pages. Extracted text comes
//! back as whitespace-separated lines; a data line has the shape
//!
//! ```text
//! <card_number> <MM/YY> <provider words...> <YYYY-MM-DD>
//! ```
//!
//! Header repeats, page numbers, and any other furniture fail the shape
//! check and are skipped.

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use super::models::RawCard;

/// Extract the plain text of a PDF document
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| anyhow::anyhow!("PDF text extraction failed: {}", e))
}

/// Parse card records out of extracted PDF text.
///
/// Returns the records plus the number of non-empty lines that did not
/// parse (header repeats and page furniture land there).
pub fn parse_card_text(text: &str) -> (Vec<RawCard>, usize) {
    // MM/YY expiry; the one token that reliably marks a data line
    let expiry_re = Regex::new(r"^\d{2}/\d{2}$").expect("static expiry regex");
    let date_re = Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date regex");

    let mut cards = Vec::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_card_line(line, &expiry_re, &date_re) {
            Some(card) => cards.push(card),
            None => {
                debug!(line = %line, "Skipping non-record PDF line");
                skipped += 1;
            }
        }
    }

    (cards, skipped)
}

/// Parse one line of PDF text into a card record
fn parse_card_line(line: &str, expiry_re: &Regex, date_re: &Regex) -> Option<RawCard> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return None;
    }

    let card_number = tokens[0];
    let expiry_date = tokens[1];
    let date_payment_confirmed = tokens[tokens.len() - 1];
    let provider_tokens = &tokens[2..tokens.len() - 1];

    if !expiry_re.is_match(expiry_date) || !date_re.is_match(date_payment_confirmed) {
        return None;
    }

    if provider_tokens.is_empty() {
        return None;
    }

    Some(RawCard {
        card_number: card_number.to_string(),
        expiry_date: expiry_date.to_string(),
        card_provider: provider_tokens.join(" "),
        date_payment_confirmed: date_payment_confirmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
card_number expiry_date card_provider date_payment_confirmed\n\
30060773296197 09/26 Diners Club / Carte Blanche 2015-11-25\n\
349624180933183 10/23 American Express 2001-06-18\n\
4971858637664481 06/29 VISA 16 digit 2008-06-16\n\
\n\
Page 1 of 279\n\
?4654492346226715 06/27 VISA 16 digit 2006-04-17\n";

    #[test]
    fn test_parse_card_text() {
        let (cards, skipped) = parse_card_text(SAMPLE);

        assert_eq!(cards.len(), 4);
        // header line and page footer fail the shape check
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_parse_multi_word_provider() {
        let (cards, _) = parse_card_text(SAMPLE);

        assert_eq!(cards[0].card_number, "30060773296197");
        assert_eq!(cards[0].expiry_date, "09/26");
        assert_eq!(cards[0].card_provider, "Diners Club / Carte Blanche");
        assert_eq!(cards[0].date_payment_confirmed, "2015-11-25");
    }

    #[test]
    fn test_parse_keeps_dirty_card_numbers() {
        // leading '?' garbage stays on the card number for the cleaner
        let (cards, _) = parse_card_text(SAMPLE);
        assert_eq!(cards[3].card_number, "?4654492346226715");
    }

    #[test]
    fn test_parse_rejects_short_lines() {
        let expiry_re = Regex::new(r"^\d{2}/\d{2}$").unwrap();
        let date_re = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();

        assert!(parse_card_line("Page 12", &expiry_re, &date_re).is_none());
        assert!(parse_card_line("1234 09/26 2015-11-25", &expiry_re, &date_re).is_none());
    }
}
