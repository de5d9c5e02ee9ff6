//! Integration tests: full station lifecycle and pipeline against mock
//! hardware.

mod mock_hw;
