mod domain_exception_tests;
