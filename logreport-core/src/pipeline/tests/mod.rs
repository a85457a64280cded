mod rank_tests;
