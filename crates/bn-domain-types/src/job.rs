//! Job listing domain types

use serde::{Deserialize, Serialize};

/// Employment type of a job listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Temporary,
    #[serde(rename = "Rent a Chair")]
    RentAChair,
}

impl JobType {
    /// Every job type, in the order the posting form presents them
    pub const ALL: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Temporary,
        JobType::RentAChair,
    ];

    /// The wire/display name of the job type
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Temporary => "Temporary",
            JobType::RentAChair => "Rent a Chair",
        }
    }
}

// Ordered by display name so sorted listings come out alphabetical.
impl Ord for JobType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for JobType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown job type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for job_type in JobType::ALL {
            let json = serde_json::to_string(&job_type).unwrap();
            assert_eq!(json, format!("\"{}\"", job_type.as_str()));
            let back: JobType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, job_type);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Rent a Chair".parse::<JobType>().unwrap(), JobType::RentAChair);
        assert_eq!("full-time".parse::<JobType>().unwrap(), JobType::FullTime);
        assert!("Freelance".parse::<JobType>().is_err());
    }
}
