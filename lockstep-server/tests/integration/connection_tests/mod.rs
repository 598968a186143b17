mod test_first_join_becomes_host;
mod test_late_joiner_resyncs;
