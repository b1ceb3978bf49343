use std::{fmt, str::FromStr};

use crate::ValidationError;

/// Regional routing value used by the account and match endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cluster {
    Americas,
    Europe,
    Asia,
    Sea,
}

impl Cluster {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Europe => "europe",
            Self::Asia => "asia",
            Self::Sea => "sea",
        }
    }
}

impl FromStr for Cluster {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "americas" => Ok(Self::Americas),
            "europe" => Ok(Self::Europe),
            "asia" => Ok(Self::Asia),
            "sea" => Ok(Self::Sea),
            _ => Err(ValidationError::UnknownCluster(s.trim().to_owned())),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform (shard) region used by the league endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Na1,
    Br1,
    La1,
    La2,
    Euw1,
    Eun1,
    Tr1,
    Ru,
    Kr,
    Jp1,
    Oc1,
    Ph2,
    Sg2,
    Th2,
    Tw2,
    Vn2,
}

const PLATFORMS: [Platform; 16] = [
    Platform::Na1,
    Platform::Br1,
    Platform::La1,
    Platform::La2,
    Platform::Euw1,
    Platform::Eun1,
    Platform::Tr1,
    Platform::Ru,
    Platform::Kr,
    Platform::Jp1,
    Platform::Oc1,
    Platform::Ph2,
    Platform::Sg2,
    Platform::Th2,
    Platform::Tw2,
    Platform::Vn2,
];

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Na1 => "na1",
            Self::Br1 => "br1",
            Self::La1 => "la1",
            Self::La2 => "la2",
            Self::Euw1 => "euw1",
            Self::Eun1 => "eun1",
            Self::Tr1 => "tr1",
            Self::Ru => "ru",
            Self::Kr => "kr",
            Self::Jp1 => "jp1",
            Self::Oc1 => "oc1",
            Self::Ph2 => "ph2",
            Self::Sg2 => "sg2",
            Self::Th2 => "th2",
            Self::Tw2 => "tw2",
            Self::Vn2 => "vn2",
        }
    }

    /// Cluster that serves account and match data for this platform.
    pub fn cluster(self) -> Cluster {
        match self {
            Self::Na1 | Self::Br1 | Self::La1 | Self::La2 => Cluster::Americas,
            Self::Euw1 | Self::Eun1 | Self::Tr1 | Self::Ru => Cluster::Europe,
            Self::Kr | Self::Jp1 => Cluster::Asia,
            Self::Oc1 | Self::Ph2 | Self::Sg2 | Self::Th2 | Self::Tw2 | Self::Vn2 => Cluster::Sea,
        }
    }
}

impl FromStr for Platform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PLATFORMS
            .into_iter()
            .find(|platform| platform.as_str() == wanted)
            .ok_or_else(|| ValidationError::UnknownRegion(s.trim().to_owned()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cluster, Platform, PLATFORMS};
    use crate::ValidationError;

    #[test]
    fn platform_parse_is_case_insensitive() {
        assert_eq!("EUW1".parse::<Platform>(), Ok(Platform::Euw1));
        assert_eq!(" kr ".parse::<Platform>(), Ok(Platform::Kr));
    }

    #[test]
    fn every_platform_round_trips_through_its_code() {
        for platform in PLATFORMS {
            assert_eq!(platform.as_str().parse::<Platform>(), Ok(platform));
        }
    }

    #[test]
    fn platforms_route_to_clusters() {
        assert_eq!(Platform::Na1.cluster(), Cluster::Americas);
        assert_eq!(Platform::Tr1.cluster(), Cluster::Europe);
        assert_eq!(Platform::Jp1.cluster(), Cluster::Asia);
        assert_eq!(Platform::Vn2.cluster(), Cluster::Sea);
    }

    #[test]
    fn unknown_codes_are_validation_errors() {
        assert_eq!(
            "moon".parse::<Platform>(),
            Err(ValidationError::UnknownRegion("moon".to_owned()))
        );
        assert_eq!(
            "mars".parse::<Cluster>(),
            Err(ValidationError::UnknownCluster("mars".to_owned()))
        );
    }
}
