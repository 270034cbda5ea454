use logos::Logos;
use thiserror::Error;

pub mod playground;

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t]+")] // Ignore this regex pattern between tokens
enum Token {
    #[regex(r"-?[0-9]+", priority = 3)]
    Integer,

    #[regex(r"-?[0-9]+\.[0-9]+", priority = 3)]
    Float,

    // Longest match wins, so an annotated value like `32*` is a single
    // Word, never an Integer followed by junk.
    #[regex(r"[^ \t\r\n]+")]
    Word,
}

/// One day's readings from a `weather.dat` row: the day number and the
/// maximum and minimum temperature of that day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub day: u8,
    pub max_temp: f32,
    pub min_temp: f32,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseObservationError {
    #[error("expected at least 4 columns, found {0}")]
    TooFewColumns(usize),
    #[error("bad day number: `{0}`")]
    BadDay(String),
    #[error("bad temperature: `{0}`")]
    BadTemperature(String),
    #[error("unlexable column: `{0}`")]
    BadColumn(String),
}

impl Observation {
    /// Parse one data row. Columns beyond the first three are ignored.
    ///
    /// Header, footer and blank lines all fail here; [`observations`] drops
    /// them instead of propagating the error.
    pub fn parse(line: &str) -> Result<Self, ParseObservationError> {
        let mut lexer = Token::lexer(line);
        let mut columns = Vec::new();
        while let Some(token) = lexer.next() {
            match token {
                Ok(token) => columns.push((token, lexer.slice())),
                Err(()) => {
                    return Err(ParseObservationError::BadColumn(lexer.slice().to_string()))
                }
            }
        }

        if columns.len() < 4 {
            return Err(ParseObservationError::TooFewColumns(columns.len()));
        }

        let day = match columns[0] {
            (Token::Integer, slice) => slice
                .parse()
                .map_err(|_| ParseObservationError::BadDay(slice.to_string()))?,
            (_, slice) => return Err(ParseObservationError::BadDay(slice.to_string())),
        };

        let max_temp = temperature(&columns[1])?;
        let min_temp = temperature(&columns[2])?;

        Ok(Self {
            day,
            max_temp,
            min_temp,
        })
    }

    pub fn spread(&self) -> f32 {
        self.max_temp - self.min_temp
    }
}

fn temperature((token, slice): &(Token, &str)) -> Result<f32, ParseObservationError> {
    match token {
        // The regexes only admit text that parses as f32
        Token::Integer | Token::Float => Ok(slice.parse().unwrap()),
        Token::Word => Err(ParseObservationError::BadTemperature(slice.to_string())),
    }
}

/// Lazily turn raw lines into the observations they contain, in input order.
/// Lines that don't parse (headers, footers, annotated values, blanks) are
/// dropped.
pub fn observations<'a, I>(lines: I) -> impl Iterator<Item = Observation> + use<'a, I>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| Observation::parse(line).ok())
}

/// The observation with the smallest temperature spread, or `None` when the
/// sequence is empty. The first minimal observation wins ties.
pub fn smallest_spread<I>(observations: I) -> Option<Observation>
where
    I: IntoIterator<Item = Observation>,
{
    observations
        .into_iter()
        .min_by(|left, right| left.spread().total_cmp(&right.spread()))
}
