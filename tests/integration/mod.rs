//! Integration test target covering source-to-export report flows

mod report_flow;
