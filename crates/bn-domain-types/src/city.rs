//! The fixed list of cities a barber profile can be registered in
//!
//! The backend only accepts cities from this list, so the type is a closed
//! enum rather than free text. Wire values are the human-readable names.

use serde::{Deserialize, Serialize};

/// A UK city supported by the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    London,
    Manchester,
    Birmingham,
    Liverpool,
    Leeds,
    Sheffield,
    Newcastle,
    Nottingham,
    Bristol,
    Leicester,
    Coventry,
    Sunderland,
    Bradford,
    Hull,
    #[serde(rename = "Stoke-on-Trent")]
    StokeOnTrent,
    Wolverhampton,
    Derby,
    Southampton,
    Portsmouth,
    Plymouth,
    Brighton,
    Reading,
    #[serde(rename = "Milton Keynes")]
    MiltonKeynes,
    Norwich,
    Peterborough,
    Luton,
    Swindon,
    York,
    Blackpool,
    Bolton,
    Middlesbrough,
    Stockport,
    Warrington,
    Huddersfield,
    Preston,
    Bournemouth,
    Ipswich,
    Cambridge,
    Chelmsford,
    Canterbury,
    Exeter,
    Chester,
}

impl City {
    /// Every supported city, in the order the signup form presents them
    pub const ALL: [City; 42] = [
        City::London,
        City::Manchester,
        City::Birmingham,
        City::Liverpool,
        City::Leeds,
        City::Sheffield,
        City::Newcastle,
        City::Nottingham,
        City::Bristol,
        City::Leicester,
        City::Coventry,
        City::Sunderland,
        City::Bradford,
        City::Hull,
        City::StokeOnTrent,
        City::Wolverhampton,
        City::Derby,
        City::Southampton,
        City::Portsmouth,
        City::Plymouth,
        City::Brighton,
        City::Reading,
        City::MiltonKeynes,
        City::Norwich,
        City::Peterborough,
        City::Luton,
        City::Swindon,
        City::York,
        City::Blackpool,
        City::Bolton,
        City::Middlesbrough,
        City::Stockport,
        City::Warrington,
        City::Huddersfield,
        City::Preston,
        City::Bournemouth,
        City::Ipswich,
        City::Cambridge,
        City::Chelmsford,
        City::Canterbury,
        City::Exeter,
        City::Chester,
    ];

    /// The wire/display name of the city
    pub fn as_str(&self) -> &'static str {
        match self {
            City::London => "London",
            City::Manchester => "Manchester",
            City::Birmingham => "Birmingham",
            City::Liverpool => "Liverpool",
            City::Leeds => "Leeds",
            City::Sheffield => "Sheffield",
            City::Newcastle => "Newcastle",
            City::Nottingham => "Nottingham",
            City::Bristol => "Bristol",
            City::Leicester => "Leicester",
            City::Coventry => "Coventry",
            City::Sunderland => "Sunderland",
            City::Bradford => "Bradford",
            City::Hull => "Hull",
            City::StokeOnTrent => "Stoke-on-Trent",
            City::Wolverhampton => "Wolverhampton",
            City::Derby => "Derby",
            City::Southampton => "Southampton",
            City::Portsmouth => "Portsmouth",
            City::Plymouth => "Plymouth",
            City::Brighton => "Brighton",
            City::Reading => "Reading",
            City::MiltonKeynes => "Milton Keynes",
            City::Norwich => "Norwich",
            City::Peterborough => "Peterborough",
            City::Luton => "Luton",
            City::Swindon => "Swindon",
            City::York => "York",
            City::Blackpool => "Blackpool",
            City::Bolton => "Bolton",
            City::Middlesbrough => "Middlesbrough",
            City::Stockport => "Stockport",
            City::Warrington => "Warrington",
            City::Huddersfield => "Huddersfield",
            City::Preston => "Preston",
            City::Bournemouth => "Bournemouth",
            City::Ipswich => "Ipswich",
            City::Cambridge => "Cambridge",
            City::Chelmsford => "Chelmsford",
            City::Canterbury => "Canterbury",
            City::Exeter => "Exeter",
            City::Chester => "Chester",
        }
    }
}

// Ordered by display name so sorted listings come out alphabetical.
impl Ord for City {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for City {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown city: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for city in City::ALL {
            let json = serde_json::to_string(&city).unwrap();
            assert_eq!(json, format!("\"{}\"", city.as_str()));
            let back: City = serde_json::from_str(&json).unwrap();
            assert_eq!(back, city);
        }
    }

    #[test]
    fn test_multi_word_names() {
        assert_eq!(City::StokeOnTrent.as_str(), "Stoke-on-Trent");
        assert_eq!(City::MiltonKeynes.as_str(), "Milton Keynes");
        assert_eq!("Milton Keynes".parse::<City>().unwrap(), City::MiltonKeynes);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("london".parse::<City>().unwrap(), City::London);
        assert!("Atlantis".parse::<City>().is_err());
    }

    #[test]
    fn test_ordering_is_alphabetical() {
        let mut cities = vec![City::York, City::Bolton, City::Leeds];
        cities.sort();
        assert_eq!(cities, vec![City::Bolton, City::Leeds, City::York]);
    }
}
