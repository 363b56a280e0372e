/// Failure classes surfaced to the user.
///
/// The pipeline aborts on the first error; there is no partial-report mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed date/time input (rejected before any computation).
    InvalidDateTime,
    /// City/state could not be resolved to coordinates.
    Geocoding,
    /// The ephemeris computation produced an unusable result.
    Ephemeris,
    /// File read/write failure (exports, saved reports).
    Io,
}

impl ErrorKind {
    /// Process exit code for this failure class.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidDateTime => 2,
            ErrorKind::Geocoding => 3,
            ErrorKind::Ephemeris => 4,
            ErrorKind::Io => 2,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_datetime(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDateTime, message)
    }

    pub fn geocoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Geocoding, message)
    }

    pub fn ephemeris(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Ephemeris, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
