use rand::Rng;
use rand::rngs::ThreadRng;

/// Counts at which the sequence label switches padding width.
const TWO_DIGIT_COUNT: u64 = 10;
const THREE_DIGIT_COUNT: u64 = 100;

/// Range of the random middle segment: 9 digits, never starting with 0.
const RANDOM_FLOOR: f64 = 100_000_000.0;
const RANDOM_SPAN: f64 = 900_000_000.0;

/// Identifying prefix carried from invoice to invoice: client
/// abbreviation plus the random digits established by the first invoice.
const PREFIX_LEN: usize = 12;

/// Sequence label for the next invoice given the current count of
/// invoices for the client.
///
/// The label is `count + 1`, padded by the magnitude of `count`:
/// `"001"`…`"0010"` below ten, `"011"`…`"0100"` below a hundred, plain
/// decimal from there. The width jump at the 9→10 and 99→100 boundaries
/// is long-established in issued numbers and is kept as-is.
pub fn sequence_label(count: u64) -> String {
    let next = count + 1;

    if count < TWO_DIGIT_COUNT {
        return format!("00{next}");
    }

    if count < THREE_DIGIT_COUNT {
        return format!("0{next}");
    }

    next.to_string()
}

/// Random 9-digit middle segment, e.g. "648172530".
///
/// Drawn as `floor(100000000 + r * 900000000)` for uniform `r` in [0, 1),
/// which lands exactly on 100000000..=999999999.
pub fn random_digits<R: Rng>(rng: &mut R) -> String {
    let r: f64 = rng.random();
    ((RANDOM_FLOOR + r * RANDOM_SPAN) as u64).to_string()
}

/// Generate an invoice number, e.g. "KMP674407360001".
///
/// With no prior invoices (`count < 1`) a new number is composed from the
/// client abbreviation, a fresh random segment, and the first sequence
/// label. Otherwise the first 12 characters of `existing` — the prefix
/// established by the client's first invoice — are reused verbatim and
/// only the sequence label advances. An `existing` shorter than 12
/// characters yields a correspondingly shorter prefix; no validation is
/// performed.
pub fn generate_invoice_number<R: Rng>(
    abbreviation: &str,
    count: u64,
    existing: &str,
    rng: &mut R,
) -> String {
    if count < 1 {
        return format!(
            "{abbreviation}{}{}",
            random_digits(rng),
            sequence_label(count)
        );
    }

    let prefix: String = existing.chars().take(PREFIX_LEN).collect();
    format!("{prefix}{}", sequence_label(count))
}

/// Invoice number generator owning its entropy source.
///
/// The free functions above take any [`Rng`] so tests can pass a seeded
/// generator; this wrapper is the convenience used by creation flows.
#[derive(Debug, Clone)]
pub struct InvoiceNumberGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl InvoiceNumberGenerator {
    /// Generator backed by the thread-local RNG.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for InvoiceNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> InvoiceNumberGenerator<R> {
    /// Generator backed by a caller-supplied RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// See [`generate_invoice_number`].
    pub fn generate(&mut self, abbreviation: &str, count: u64, existing: &str) -> String {
        generate_invoice_number(abbreviation, count, existing, &mut self.rng)
    }
}
