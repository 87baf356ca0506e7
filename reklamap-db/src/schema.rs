//! SQLite schema definitions for ReklaMap

/// Complete ReklaMap schema for SQLite.
///
/// Timestamps are fixed-width UTC text (`YYYY-MM-DD HH:MM:SS.ffffff`) so that
/// ordering by the column is chronological. JSON answers are stored as text.
pub const SCHEMA: &str = r#"
-- ============================================
-- Reference data
-- ============================================
CREATE TABLE IF NOT EXISTS areas (
    area_id INTEGER PRIMARY KEY,
    area_code TEXT NOT NULL,
    area_name TEXT NOT NULL,
    president TEXT,
    designation TEXT,
    contact_no TEXT
);

CREATE TABLE IF NOT EXISTS blocks (
    block_id INTEGER PRIMARY KEY,
    area_id INTEGER NOT NULL REFERENCES areas(area_id),
    block_no INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_blocks_area ON blocks(area_id, block_no);

CREATE TABLE IF NOT EXISTS beneficiaries (
    beneficiary_id INTEGER PRIMARY KEY,
    area_id INTEGER NOT NULL REFERENCES areas(area_id),
    block_id INTEGER NOT NULL REFERENCES blocks(block_id),
    first_name TEXT NOT NULL,
    middle_initial TEXT,
    last_name TEXT NOT NULL,
    suffix TEXT,
    lot_no INTEGER NOT NULL,
    sqm REAL,
    co_owner TEXT
);
CREATE INDEX IF NOT EXISTS idx_beneficiaries_block ON beneficiaries(block_id, lot_no);
CREATE INDEX IF NOT EXISTS idx_beneficiaries_name ON beneficiaries(last_name, first_name);

-- ============================================
-- Registration
-- ============================================
CREATE TABLE IF NOT EXISTS registration (
    registration_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    beneficiary_id INTEGER REFERENCES beneficiaries(beneficiary_id),
    category TEXT NOT NULL CHECK (category IN ('hoa_member', 'family_of_member', 'non_member')),
    first_name TEXT NOT NULL,
    middle_name TEXT,
    last_name TEXT NOT NULL,
    suffix TEXT,
    date_of_birth TEXT,
    sex TEXT,
    citizenship TEXT,
    age INTEGER,
    phone_number TEXT,
    year_of_residence INTEGER,
    civil_status TEXT,
    current_address TEXT,
    hoa TEXT,
    block_no TEXT,
    lot_no TEXT,
    lot_size TEXT,
    recipient_of_other_housing TEXT,
    signature_path TEXT,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_registration_user ON registration(user_id);

-- ============================================
-- Complaints
-- ============================================
CREATE TABLE IF NOT EXISTS complaints (
    complaint_id INTEGER PRIMARY KEY AUTOINCREMENT,
    registration_id INTEGER NOT NULL REFERENCES registration(registration_id),
    type_of_complaint TEXT NOT NULL,
    date_received TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'Valid' CHECK (status IN ('Valid', 'Invalid')),
    complaint_stage TEXT NOT NULL DEFAULT 'Pending',
    priority_level TEXT CHECK (priority_level IN ('Severe', 'Moderate', 'Minor')),
    description TEXT,
    complainant_name TEXT NOT NULL,
    area_id INTEGER NOT NULL REFERENCES areas(area_id),
    address TEXT
);
CREATE INDEX IF NOT EXISTS idx_complaints_registration ON complaints(registration_id);
CREATE INDEX IF NOT EXISTS idx_complaints_status ON complaints(status, complaint_stage);

-- ============================================
-- Questionnaire answers (1:1 with complaints)
-- ============================================
CREATE TABLE IF NOT EXISTS lot_dispute (
    lot_id INTEGER PRIMARY KEY AUTOINCREMENT,
    complaint_id INTEGER NOT NULL UNIQUE REFERENCES complaints(complaint_id) ON DELETE CASCADE,
    q1 TEXT,
    block_lot TEXT,
    q2 TEXT,
    q3 TEXT,
    q4 TEXT,
    q5 TEXT,
    q6 TEXT,
    q7 TEXT,
    q8 TEXT,
    q9 TEXT,
    q10 TEXT,
    description TEXT,
    signature TEXT
);

CREATE TABLE IF NOT EXISTS boundary_dispute (
    boundary_id INTEGER PRIMARY KEY AUTOINCREMENT,
    complaint_id INTEGER NOT NULL UNIQUE REFERENCES complaints(complaint_id) ON DELETE CASCADE,
    q1 TEXT,
    q2 TEXT,
    q3 TEXT,
    q4 TEXT,
    q5 TEXT,
    q5_1 TEXT,
    q6 TEXT,
    q7 TEXT,
    q8 TEXT,
    q9 TEXT,
    q10 TEXT,
    q10_1 TEXT,
    q11 TEXT,
    q12 TEXT,
    q13 TEXT,
    q14 TEXT,
    q15 TEXT,
    q15_1 TEXT,
    other_parties TEXT,
    description TEXT,
    signature TEXT
);

CREATE TABLE IF NOT EXISTS pathway_dispute (
    pathway_id INTEGER PRIMARY KEY AUTOINCREMENT,
    complaint_id INTEGER NOT NULL UNIQUE REFERENCES complaints(complaint_id) ON DELETE CASCADE,
    block_lot TEXT,
    q1 TEXT,
    q2 TEXT,
    q3 TEXT,
    q4 TEXT,
    q5 TEXT,
    q6 TEXT,
    q7 TEXT,
    q8 TEXT,
    q9 TEXT,
    q10 TEXT,
    q11 TEXT,
    q12 TEXT,
    description TEXT,
    signature TEXT
);

CREATE TABLE IF NOT EXISTS unauthorized_occupation (
    occupation_id INTEGER PRIMARY KEY AUTOINCREMENT,
    complaint_id INTEGER NOT NULL UNIQUE REFERENCES complaints(complaint_id) ON DELETE CASCADE,
    block_lot TEXT,
    q1 TEXT,
    q2 TEXT,
    q3 TEXT,
    q4 TEXT,
    q5 TEXT,
    q5a TEXT,
    q6 TEXT,
    q6a TEXT,
    q7 TEXT,
    q8 TEXT,
    description TEXT,
    signature TEXT
);

CREATE TABLE IF NOT EXISTS overlapping (
    overlapping_id INTEGER PRIMARY KEY AUTOINCREMENT,
    complaint_id INTEGER NOT NULL UNIQUE REFERENCES complaints(complaint_id) ON DELETE CASCADE,
    registration_id INTEGER NOT NULL REFERENCES registration(registration_id),
    q1 TEXT,
    q2 TEXT,
    q3 TEXT,
    q4 TEXT,
    q5 TEXT,
    q6 TEXT,
    q7 TEXT,
    q8 TEXT,
    q9 TEXT,
    q10 TEXT,
    q11 TEXT,
    q12 TEXT,
    q13 TEXT,
    description TEXT,
    signature TEXT
);

-- ============================================
-- History (append-only)
-- ============================================
CREATE TABLE IF NOT EXISTS complaint_history (
    history_id INTEGER PRIMARY KEY AUTOINCREMENT,
    complaint_id INTEGER NOT NULL REFERENCES complaints(complaint_id) ON DELETE CASCADE,
    type_of_action TEXT NOT NULL,
    assigned_to TEXT,
    action_datetime TEXT NOT NULL,
    details TEXT NOT NULL DEFAULT '{}' CHECK (json_valid(details))
);
CREATE INDEX IF NOT EXISTS idx_history_complaint ON complaint_history(complaint_id, action_datetime, history_id);
CREATE INDEX IF NOT EXISTS idx_history_assignee ON complaint_history(assigned_to);
"#;
