//! End-to-end tests for the errs transport adapters live under `tests/`
