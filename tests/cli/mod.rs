mod malformed_invocations_report_a_diagnostic;
