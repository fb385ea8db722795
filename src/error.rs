use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch schedule page: {0}")]
    Fetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("Schedule page not found (404): {url}")]
    PageNotFound { url: String },

    #[error("Server error ({status}): {message} (URL: {url})")]
    ServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Client error ({status}): {message} (URL: {url})")]
    ClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("No schedule table found in page: {url}")]
    TableNotFound { url: String },

    // Data shape and content errors
    #[error("Missing source column '{column}'")]
    MissingColumn { column: String },

    #[error("Table headers do not match: {message}")]
    HeaderMismatch { message: String },

    #[error("Row {row}: cannot parse {column} value '{value}': {message}")]
    Parse {
        row: usize,
        column: String,
        value: String,
        message: String,
    },

    #[error("Row {row}: {column} value '{value}' is not a valid {expected}")]
    Type {
        row: usize,
        column: String,
        value: String,
        expected: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a page not found error
    pub fn page_not_found(url: impl Into<String>) -> Self {
        Self::PageNotFound { url: url.into() }
    }

    /// Create a server error (5xx status codes)
    pub fn server_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a client error (4xx status codes except 404)
    pub fn client_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn table_not_found(url: impl Into<String>) -> Self {
        Self::TableNotFound { url: url.into() }
    }

    /// Create a schema error for a required column the source no longer publishes
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    pub fn header_mismatch(message: impl Into<String>) -> Self {
        Self::HeaderMismatch {
            message: message.into(),
        }
    }

    /// Create a date/time parsing error for a specific row
    pub fn parse_error(
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            row,
            column: column.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a numeric coercion error for a specific row
    pub fn type_error(
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::Type {
            row,
            column: column.into(),
            value: value.into(),
            expected,
        }
    }

    /// Check if error came from the table source (network, HTTP status, page layout)
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            AppError::Fetch(_)
                | AppError::PageNotFound { .. }
                | AppError::ServerError { .. }
                | AppError::ClientError { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::TableNotFound { .. }
        )
    }

    /// Check if error indicates the fetched data does not fit the expected schema or types
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingColumn { .. }
                | AppError::HeaderMismatch { .. }
                | AppError::Parse { .. }
                | AppError::Type { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_page_not_found_helper() {
        let error = AppError::page_not_found("https://example.com/NBA_2016_games-june.html");
        assert_eq!(
            error.to_string(),
            "Schedule page not found (404): https://example.com/NBA_2016_games-june.html"
        );
    }

    #[test]
    fn test_server_and_client_error_helpers() {
        let error = AppError::server_error(500, "Internal Server Error", "https://example.com");
        assert_eq!(
            error.to_string(),
            "Server error (500): Internal Server Error (URL: https://example.com)"
        );

        let error = AppError::client_error(429, "Too Many Requests", "https://example.com");
        assert_eq!(
            error.to_string(),
            "Client error (429): Too Many Requests (URL: https://example.com)"
        );
    }

    #[test]
    fn test_parse_error_helper() {
        let error = AppError::parse_error(3, "date", "Oct 27 2015", "input contains invalid characters");
        assert!(matches!(error, AppError::Parse { row: 3, .. }));
        assert_eq!(
            error.to_string(),
            "Row 3: cannot parse date value 'Oct 27 2015': input contains invalid characters"
        );
    }

    #[test]
    fn test_type_error_helper() {
        let error = AppError::type_error(12, "away_points", "Playoffs", "integer");
        assert_eq!(
            error.to_string(),
            "Row 12: away_points value 'Playoffs' is not a valid integer"
        );
    }

    #[test]
    fn test_missing_column_helper() {
        let error = AppError::missing_column("Start (ET)");
        assert_eq!(error.to_string(), "Missing source column 'Start (ET)'");
    }

    #[test]
    fn test_is_fetch_error() {
        assert!(AppError::page_not_found("url").is_fetch_error());
        assert!(AppError::server_error(503, "message", "url").is_fetch_error());
        assert!(AppError::client_error(403, "message", "url").is_fetch_error());
        assert!(AppError::network_timeout("url").is_fetch_error());
        assert!(AppError::network_connection("url", "refused").is_fetch_error());
        assert!(AppError::table_not_found("url").is_fetch_error());

        assert!(!AppError::missing_column("Date").is_fetch_error());
        assert!(!AppError::config_error("message").is_fetch_error());
    }

    #[test]
    fn test_is_data_error() {
        assert!(AppError::missing_column("Date").is_data_error());
        assert!(AppError::header_mismatch("x").is_data_error());
        assert!(AppError::parse_error(0, "start", "8:00", "bad").is_data_error());
        assert!(AppError::type_error(0, "attendance", "n/a", "integer").is_data_error());

        assert!(!AppError::network_timeout("url").is_data_error());
        assert!(!AppError::log_setup_error("message").is_data_error());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<serde_json::Value>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::Json(_)));
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        let request_result = client.get("not a valid url").build();

        match request_result {
            Err(reqwest_error) => {
                let app_error: AppError = reqwest_error.into();
                assert!(matches!(app_error, AppError::Fetch(_)));
                assert!(app_error.is_fetch_error());
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }
}
