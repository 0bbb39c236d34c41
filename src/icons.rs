//! Maps api.weather.gov icon links to the regional map's icon assets.

const REGIONAL_ICON_DIR: &str = "images/r";

/// Picks the regional icon for an icon link such as
/// `https://api.weather.gov/icons/land/night/rain_showers,40/tsra,60?size=medium`.
///
/// Only the first condition in the link is used. Returns `None` for links that do
/// not follow the `/icons/land/{day|night}/` layout or name an unknown condition.
pub fn regional_icon(link: &str, is_night: bool) -> Option<String> {
    let (_, path) = link.split_once("/icons/land/")?;
    let path = path.split('?').next().unwrap_or(path);
    let mut segments = path.split('/');
    let _time_of_day = segments.next()?;
    let condition = segments.next()?.split(',').next()?;

    let file = match condition {
        "skc" | "few" | "hot" => {
            if is_night {
                "Clear-1992.gif"
            } else {
                "Sunny.gif"
            }
        }
        "sct" | "bkn" => {
            if is_night {
                "Partly-Clear-1994.gif"
            } else {
                "Partly-Cloudy.gif"
            }
        }
        "ovc" => "Cloudy.gif",
        "wind_skc" | "wind_few" | "wind_sct" | "wind_bkn" | "wind_ovc" => "Wind.gif",
        "snow" => "Light-Snow.gif",
        "blizzard" => "Blowing-Snow.gif",
        "rain_snow" => "Rain-Snow-1992.gif",
        "rain_sleet" | "snow_sleet" | "sleet" => "Sleet.gif",
        "fzra" | "rain_fzra" | "snow_fzra" => "Freezing-Rain-1992.gif",
        "rain" | "rain_showers" | "rain_showers_hi" => "Rain-1992.gif",
        "tsra" | "tsra_sct" | "tsra_hi" | "tornado" | "hurricane" | "tropical_storm" => {
            "Thunderstorm.gif"
        }
        "fog" => "Fog.gif",
        "dust" | "smoke" | "haze" => "Smoke.gif",
        "cold" => "Cold.gif",
        _ => return None,
    };

    Some(format!("{}/{}", REGIONAL_ICON_DIR, file))
}
