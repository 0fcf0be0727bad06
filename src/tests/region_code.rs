pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ar() -> &'static str {
        "AR"
    }

    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn it() -> &'static str {
        "IT"
    }

    pub fn nz() -> &'static str {
        "NZ"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }

    pub fn all() -> [&'static str; 7] {
        [
            Self::ar(), Self::ca(), Self::de(), Self::gb(),
            Self::it(), Self::nz(), Self::us(),
        ]
    }
}
