mod test_delivery_failure_isolated;
