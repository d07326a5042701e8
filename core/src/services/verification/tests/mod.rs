mod matcher_tests;
