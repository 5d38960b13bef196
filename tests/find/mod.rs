mod find_commits_by_message;
