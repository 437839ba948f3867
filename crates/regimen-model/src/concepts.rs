//! Well-known concept names used by the built-in regimen rules
//!
//! These are the names the host dictionary is expected to resolve. The
//! pipeline never hardcodes ids.

pub const CRYPTOCOCCAL_TREATMENT_PLAN: &str = "CRYPTOCOCCAL TREATMENT PLAN";
pub const CRYPTOCOCCUS_TREATMENT_STARTED: &str = "CRYPTOCOCCUS TREATMENT STARTED";
pub const START_DRUGS: &str = "START DRUGS";
pub const STOP_ALL: &str = "STOP ALL";
pub const FLUCONAZOLE: &str = "FLUCONAZOLE";

pub const TUBERCULOSIS_TREATMENT_STARTED: &str = "TUBERCULOSIS TREATMENT STARTED";
pub const TUBERCULOSIS_TREATMENT_COMPLETED_DATE: &str = "TUBERCULOSIS TREATMENT COMPLETED DATE";

pub const PCP_PROPHYLAXIS_STARTED: &str = "PCP PROPHYLAXIS STARTED";
pub const CURRENT_MEDICATIONS: &str = "CURRENT MEDICATIONS";
pub const PATIENT_REPORTED_CURRENT_PCP_PROPHYLAXIS: &str = "PATIENT REPORTED CURRENT PCP PROPHYLAXIS";
pub const REASON_PCP_PROPHYLAXIS_STOPPED: &str = "REASON PCP PROPHYLAXIS STOPPED";
pub const TRIMETHOPRIM_AND_SULFAMETHOXAZOLE: &str = "TRIMETHOPRIM AND SULFAMETHOXAZOLE";
