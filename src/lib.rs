// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod config;
mod error;
pub mod format;
mod national_id;
mod rate_limit;
mod stats;
mod validation;
mod vin;

// This is the public API of the dealer-checks library
pub use config::{CheckerConfig, PlateConfig, DEFAULT_SECRET_ENV_VAR};
pub use error::{ConfigurationError, ValidationFailure, VinDecodeError};
pub use format::{
    format_currency, format_date, format_number, format_percentage, format_short_date, slugify,
    truncate,
};
pub use national_id::{
    check_national_id, validate_cif, validate_dni, validate_national_id, validate_nie, NationalId,
    NationalIdCheck, NationalIdType,
};
pub use rate_limit::{
    constant_time_eq, InMemoryRateLimitStore, RateLimitConfig, RateLimitRecord, RateLimitStatus,
    RateLimitStore, RateLimiter, SecretCheck, SecretCheckResponse, SecretGuard,
    DEFAULT_LOCKOUT_WINDOW, DEFAULT_MAX_ATTEMPTS,
};
pub use validation::{
    classify_plate, validate_plate, CifCheckKind, FieldValidator, PlateKind, SpanishCifChecksum,
    SpanishDniChecksum, SpanishNieChecksum, SpanishPlateFormat, Validator, VinStructure,
    DEFAULT_EXCLUDED_LETTERS,
};
pub use vin::{
    decode_vin_basic, validate_vin, ExtendedVinInfo, VinDecoder, VinDecoderConfig, VinInfo,
    DEFAULT_VIN_SERVICE_ENDPOINT,
};

