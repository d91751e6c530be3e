// ═══════════════════════════════════════════════════════════════════
// Error Tests — ValidationError, CoreError variants, From impls
// ═══════════════════════════════════════════════════════════════════

use trade_ledger_core::errors::{CoreError, ValidationError, INVALID_TRADE_MESSAGE};

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_gain_uses_fixed_message() {
        assert_eq!(ValidationError::InvalidGain.to_string(), INVALID_TRADE_MESSAGE);
    }

    #[test]
    fn invalid_loss_uses_fixed_message() {
        assert_eq!(ValidationError::InvalidLoss.to_string(), INVALID_TRADE_MESSAGE);
    }

    #[test]
    fn fixed_message_text() {
        assert_eq!(
            INVALID_TRADE_MESSAGE,
            "Gain must be greater than 0 and Loss must be non-negative."
        );
    }

    #[test]
    fn validation_is_transparent() {
        let err = CoreError::from(ValidationError::InvalidLoss);
        assert_eq!(err.to_string(), INVALID_TRADE_MESSAGE);
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn csv() {
        let err = CoreError::Csv("unequal lengths".into());
        assert_eq!(err.to_string(), "CSV error: unequal lengths");
    }

    #[test]
    fn invalid_file_format() {
        let err = CoreError::InvalidFileFormat("missing 'PnL' column".into());
        assert_eq!(err.to_string(), "Invalid history file: missing 'PnL' column");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("bad float".into());
        assert_eq!(err.to_string(), "Serialization error: bad float");
    }
}

// ── Equality ────────────────────────────────────────────────────────

mod equality {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        assert_ne!(ValidationError::InvalidGain, ValidationError::InvalidLoss);
        assert_eq!(ValidationError::InvalidGain, ValidationError::InvalidGain);
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod from_impls {
    use super::*;

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let core_err: CoreError = io_err.into();
        match &core_err {
            CoreError::FileIO(msg) => assert!(msg.contains("read-only")),
            other => panic!("Expected FileIO, got {:?}", other),
        }
    }

    #[test]
    fn from_csv_io_error_maps_to_file_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let core_err: CoreError = csv::Error::from(io_err).into();
        assert!(matches!(core_err, CoreError::FileIO(_)));
    }

    #[test]
    fn from_csv_parse_error_maps_to_csv() {
        let data = "PnL\n0\n1,2\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let err = reader
            .records()
            .find_map(Result::err)
            .expect("ragged row should fail");
        let core_err: CoreError = err.into();
        assert!(matches!(core_err, CoreError::Csv(_)));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<f64>("not json").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::Serialization(_)));
    }

    #[test]
    fn question_mark_lifts_validation_error() {
        fn lift() -> Result<(), CoreError> {
            Err(ValidationError::InvalidGain)?;
            Ok(())
        }
        assert!(matches!(
            lift(),
            Err(CoreError::Validation(ValidationError::InvalidGain))
        ));
    }
}
