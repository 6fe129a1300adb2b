use thisslime::TracingError;
use tracing::{debug, info, instrument};
use url::Url;

use super::{Puzzle, PuzzleId};

#[derive(Debug, thiserror::Error, TracingError)]
pub enum Error {
    #[error("request failed: {0}")]
    #[event(level = WARN)]
    Request(#[from] reqwest::Error),
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// Remote sheet of puzzles, published as CSV with a
/// `phrase,level,points` header.
#[derive(Debug, Clone)]
pub struct PuzzleSource {
    client: reqwest::Client,
    url: Url,
}

impl PuzzleSource {
    pub fn new(url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<Vec<Puzzle>> {
        let text = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let puzzles = parse_rows(&text);
        info!(count = puzzles.len(), "fetched puzzles");

        Ok(puzzles)
    }

    /// Like [`fetch`](Self::fetch), but any failure is logged and comes back
    /// as an empty list. Callers treat empty as "no data".
    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn load(&self) -> Vec<Puzzle> {
        match self.fetch().await {
            Ok(puzzles) => puzzles,
            Err(err) => {
                err.trace();
                Vec::new()
            }
        }
    }
}

/// Parses newline-delimited, comma-separated rows. The first row is a header.
///
/// Rows with fewer than three fields, or whose phrase has nothing to guess,
/// are dropped one at a time. Points are read from the field's leading
/// digits, so `20 pts` is 20 and `10.5` is 10; anything else counts as 0.
pub fn parse_rows(text: &str) -> Vec<Puzzle> {
    text.split('\n')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .enumerate()
        .skip(1)
        .filter_map(|(index, row)| parse_row(index, row))
        .collect()
}

fn parse_row(index: usize, row: &str) -> Option<Puzzle> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();

    let [phrase, level, points, ..] = fields.as_slice() else {
        debug!(index, row, "dropping row with fewer than 3 fields");
        return None;
    };

    let points = leading_number(points);
    let id = PuzzleId(u32::try_from(index).ok()?);

    Puzzle::new(id, phrase, *level, points)
        .map_err(|err| debug!(index, row, %err, "dropping malformed row"))
        .ok()
}

fn leading_number(field: &str) -> u32 {
    let digits = field
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(field, |(end, _)| &field[..end]);

    digits.parse().unwrap_or_default()
}
