mod analyze_problems;
