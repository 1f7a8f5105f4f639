use std::fmt;

/// Why a parse failed. Every variant maps onto one non-OK [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected a value")]
    ExpectValue,
    #[error("invalid value")]
    InvalidValue,
    #[error("unexpected content after the root value")]
    RootNotSingular,
    #[error("number out of range")]
    NumberTooBig,
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    #[error("invalid string escape")]
    InvalidStringEscape,
    #[error("unescaped control character in string")]
    InvalidStringChar,
    #[error("invalid hex digits in unicode escape")]
    InvalidUnicodeHex,
    #[error("invalid unicode surrogate")]
    InvalidUnicodeSurrogate,
    #[error("expected ',' or ']'")]
    MissCommaOrSquareBracket,
    #[error("expected object key")]
    MissKey,
    #[error("expected ':'")]
    MissColon,
    #[error("expected ',' or '}}'")]
    MissCommaOrCurlyBracket,
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,
}

impl ErrorKind {
    pub fn status(self) -> Status {
        match self {
            ErrorKind::ExpectValue => Status::ExpectValue,
            ErrorKind::InvalidValue => Status::InvalidValue,
            ErrorKind::RootNotSingular => Status::RootNotSingular,
            ErrorKind::NumberTooBig => Status::NumberTooBig,
            ErrorKind::MissQuotationMark => Status::MissQuotationMark,
            ErrorKind::InvalidStringEscape => Status::InvalidStringEscape,
            ErrorKind::InvalidStringChar => Status::InvalidStringChar,
            ErrorKind::InvalidUnicodeHex => Status::InvalidUnicodeHex,
            ErrorKind::InvalidUnicodeSurrogate => Status::InvalidUnicodeSurrogate,
            ErrorKind::MissCommaOrSquareBracket => Status::MissCommaOrSquareBracket,
            ErrorKind::MissKey => Status::MissKey,
            ErrorKind::MissColon => Status::MissColon,
            ErrorKind::MissCommaOrCurlyBracket => Status::MissCommaOrCurlyBracket,
            ErrorKind::DepthLimitExceeded => Status::DepthLimitExceeded,
        }
    }
}

/// Outcome of [`crate::parse_into`]. Discriminants are the stable numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    Ok = 0,
    ExpectValue,
    InvalidValue,
    RootNotSingular,
    NumberTooBig,
    MissQuotationMark,
    InvalidStringEscape,
    InvalidStringChar,
    InvalidUnicodeHex,
    InvalidUnicodeSurrogate,
    MissCommaOrSquareBracket,
    MissKey,
    MissColon,
    MissCommaOrCurlyBracket,
    DepthLimitExceeded,
}

impl Status {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    pub fn name(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::ExpectValue => "EXPECT_VALUE",
            Status::InvalidValue => "INVALID_VALUE",
            Status::RootNotSingular => "ROOT_NOT_SINGULAR",
            Status::NumberTooBig => "NUMBER_TOO_BIG",
            Status::MissQuotationMark => "MISS_QUOTATION_MARK",
            Status::InvalidStringEscape => "INVALID_STRING_ESCAPE",
            Status::InvalidStringChar => "INVALID_STRING_CHAR",
            Status::InvalidUnicodeHex => "INVALID_UNICODE_HEX",
            Status::InvalidUnicodeSurrogate => "INVALID_UNICODE_SURROGATE",
            Status::MissCommaOrSquareBracket => "MISS_COMMA_OR_SQUARE_BRACKET",
            Status::MissKey => "MISS_KEY",
            Status::MissColon => "MISS_COLON",
            Status::MissCommaOrCurlyBracket => "MISS_COMMA_OR_CURLY_BRACKET",
            Status::DepthLimitExceeded => "DEPTH_LIMIT_EXCEEDED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ErrorKind> for Status {
    fn from(kind: ErrorKind) -> Self {
        kind.status()
    }
}

impl<T> From<&std::result::Result<T, Error>> for Status {
    fn from(result: &std::result::Result<T, Error>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(err) => err.kind.status(),
        }
    }
}

/// Byte offset plus 1-based line and column (columns count bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", .location.line, .location.column)]
pub struct Error {
    pub kind: ErrorKind,
    pub location: Location,
}

impl Error {
    pub fn new(kind: ErrorKind, location: Location) -> Self {
        Self { kind, location }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> Status {
        self.kind.status()
    }

    pub fn offset(&self) -> usize {
        self.location.offset
    }
}
