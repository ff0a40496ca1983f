use hifitime::Epoch;
use std::str::FromStr;

use crate::{
    constants::{JD, JDTOMJD, MJD},
    ephem_errors::EphemError,
};

/// Transformation from julian date (JD) to modified julian date (MJD)
pub fn jd_to_mjd(jd: JD) -> MJD {
    jd - JDTOMJD
}

/// Transformation from modified julian date (MJD) to julian date (JD)
pub fn mjd_to_jd(mjd: MJD) -> JD {
    mjd + JDTOMJD
}

/// Transformation from a date in the format YYYY-MM-ddTHH:mm:ss (UTC) to julian date (JD)
///
/// Argument
/// --------
/// * `date`: a date in the format YYYY-MM-ddTHH:mm:ss, UTC unless a time scale suffix is given
///
/// Return
/// ------
/// * the julian date of `date`, or [`EphemError::InvalidDate`] if it does not parse
pub fn date_to_jd(date: &str) -> Result<JD, EphemError> {
    let epoch = Epoch::from_str(date.trim())
        .map_err(|err| EphemError::InvalidDate(format!("{date}: {err}")))?;
    Ok(epoch.to_jde_utc_days())
}

/// Julian date of the system clock, in UTC
pub fn current_jd() -> Result<JD, EphemError> {
    let now = Epoch::now().map_err(|err| EphemError::InvalidDate(err.to_string()))?;
    Ok(now.to_jde_utc_days())
}
