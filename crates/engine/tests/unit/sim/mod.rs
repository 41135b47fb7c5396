//! Engine-level unit tests.
