/// Postgres `document` table round-trips; skipped without a database
pub mod document_tests;
