mod input_bridge_tests;
