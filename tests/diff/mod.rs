mod fail_for_missing_file;
mod show_all_inserts_for_empty_old_file;
mod show_colored_changes_when_forced;
mod show_deletes_before_inserts_for_disjoint_files;
mod show_inserted_line_with_context;
mod show_keeps_only_for_identical_files;
mod show_trimmed_context_around_changed_middle;
