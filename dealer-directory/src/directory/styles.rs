pub const DIRECTORY_STYLES: &str = r#"
/* Page header */
.directory-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    background: var(--header-bg, #1e293b);
    color: var(--text-primary, #f8fafc);
    border-bottom: 1px solid var(--border-color, #334155);
}

.directory-title {
    margin: 0;
    font-weight: 600;
}

/* Status line */
.directory-status {
    padding: 0.4rem 1rem;
    font-size: 0.85rem;
    color: var(--text-secondary, #475569);
}

.directory-status.failed {
    color: var(--error-color, #b91c1c);
}

/* Table */
.table {
    width: 100%;
    border-collapse: collapse;
}

.table th,
.table td {
    padding: 0.5rem 0.75rem;
    border-bottom: 1px solid var(--border-color, #e2e8f0);
    text-align: left;
}

.review_icon {
    width: 1.5rem;
    height: 1.5rem;
}
"#;
