use approx::assert_relative_eq;
use calendar::{TimeFrame, HOURS_PER_YEAR};
use std::io::Write;
use weather::{EpwData, EpwError, Float, IsoWeatherData, SolarRadiation, WeatherVariable};

const HEADER: &str = "LOCATION,WELLINGTON,-,NZL,IWEC Data,934360,-41.33,174.80,12.0,7.0
DESIGN CONDITIONS,1,Climate Design Data 2009 ASHRAE Handbook,,Heating,7,2.4,3.4
TYPICAL/EXTREME PERIODS,6,Summer - Week Nearest Max Temperature For Period,Extreme,2/ 5,2/11
GROUND TEMPERATURES,3,.5,,,,15.73,16.58,16.12,14.88,12.62,10.57,9.10,8.55,9.08,10.41,12.32,14.16
HOLIDAYS/DAYLIGHT SAVINGS,No,0,0,0
COMMENTS 1,\"IWEC- WMO#934360 - South-west Pacific -- Original Source Data (c) 2001 ASHRAE\"
COMMENTS 2, -- Ground temps produced with a standard soil diffusivity of 2.3225760E-03 {m**2/day}
DATA PERIODS,1,1,Data,Sunday, 1/ 1,12/31
";

/// A data line in which the dry bulb temperature is the month, and the
/// radiation follows a fake daily cycle
fn data_line(frame: &TimeFrame, i: usize) -> String {
    let month = frame.month(i);
    let hour = frame.hour(i);
    let daylight = hour > 6 && hour < 19;
    let (egh, eb, ed) = if daylight { (400, 500, 100) } else { (0, 0, 0) };
    format!(
        "1999,{},{},{},60,A7A7,{},5.5,80,101325,0,0,300,{},{},{},0,0,0,0,180,3.5,5,5,20,77777,9,999999999,0,0.1,0,88,0.2,0,0\r\n",
        month,
        frame.day(i),
        hour,
        month,
        egh,
        eb,
        ed
    )
}

fn write_epw(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wellington.epw");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

fn full_year() -> String {
    let frame = TimeFrame::new();
    let mut s = HEADER.to_string();
    for i in 0..HOURS_PER_YEAR {
        s.push_str(&data_line(&frame, i));
    }
    s
}

#[test]
fn test_read_full_year() {
    let (_dir, path) = write_epw(&full_year());
    let epw = EpwData::from_file(&path).unwrap();

    assert_eq!(epw.name(), "WELLINGTON");
    assert_eq!(epw.station_id(), "934360");
    assert_relative_eq!(epw.latitude(), -41.33);
    assert_relative_eq!(epw.longitude(), 174.8);
    assert_eq!(epw.timezone(), 12);
    assert_eq!(epw.rows_read(), HOURS_PER_YEAR);
    assert_eq!(epw.coerced_fields(), 0);

    assert_eq!(epw.value(WeatherVariable::DryBulb, 0), 1.);
    assert_eq!(epw.value(WeatherVariable::DryBulb, HOURS_PER_YEAR - 1), 12.);
    assert_eq!(epw.value(WeatherVariable::DewPoint, 100), 5.5);
    assert_eq!(epw.value(WeatherVariable::RelativeHumidity, 100), 80.);
    assert_eq!(epw.value(WeatherVariable::WindSpeed, 100), 3.5);
    assert_eq!(epw.value(WeatherVariable::GlobalHorizontal, 11), 400.);
    assert_eq!(epw.value(WeatherVariable::DirectBeam, 11), 500.);
    assert_eq!(epw.value(WeatherVariable::Diffuse, 11), 100.);
    assert_eq!(epw.value(WeatherVariable::Diffuse, 0), 0.);
}

#[test]
fn test_extra_rows_are_ignored() {
    let mut contents = full_year();
    for _ in 0..10 {
        contents.push_str(
            "1999,12,31,24,60,A7A7,99,99,99,101325,0,0,300,999,999,999,0,0,0,0,180,99\n",
        );
    }
    let (_dir, path) = write_epw(&contents);
    let epw = EpwData::from_file(&path).unwrap();
    assert_eq!(epw.rows_read(), HOURS_PER_YEAR);
    assert_eq!(epw.value(WeatherVariable::DryBulb, HOURS_PER_YEAR - 1), 12.);
}

#[test]
fn test_short_and_malformed_file() {
    let frame = TimeFrame::new();
    let mut contents = HEADER.to_string();
    for i in 0..48 {
        contents.push_str(&data_line(&frame, i));
    }
    contents.push_str("1999,1,3,1,60,A7A7,abc,5.5,80,101325,0,0,300,0,0,0,0,0,0,0,180,3.5\n");

    let (_dir, path) = write_epw(&contents);
    let epw = EpwData::from_file(&path).unwrap();
    assert_eq!(epw.rows_read(), 49);
    assert_eq!(epw.coerced_fields(), 1);
    assert_eq!(epw.value(WeatherVariable::DryBulb, 47), 1.);
    assert_eq!(epw.value(WeatherVariable::DryBulb, 48), 0.);
    assert_eq!(epw.value(WeatherVariable::WindSpeed, 48), 3.5);
    assert_eq!(epw.value(WeatherVariable::WindSpeed, 49), 0.);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nothing_here.epw");
    match EpwData::from_file(&path) {
        Err(EpwError::Io { path: p, .. }) => assert!(p.ends_with("nothing_here.epw")),
        other => panic!("Expecting an Io error, found {:?}", other),
    }
}

#[test]
fn test_iso_summary() {
    let (_dir, path) = write_epw(&full_year());
    let epw = EpwData::from_file(&path).unwrap();

    let iso = epw.to_iso_data();
    for (m, v) in iso.mdbt.iter().enumerate() {
        assert_relative_eq!(*v, (m + 1) as Float, max_relative = 1e-6);
    }
    for v in iso.mwind.iter() {
        assert_relative_eq!(*v, 3.5, max_relative = 1e-6);
    }
    // 12 hours of 400 Wh/m2 every day
    for v in iso.m_egh.iter() {
        assert_relative_eq!(*v, 200., max_relative = 1e-6);
    }
    for m in 0..12 {
        assert_eq!(iso.mh_egh.get(m, 0).unwrap(), 0.);
        assert_relative_eq!(iso.mh_egh.get(m, 11).unwrap(), 400., max_relative = 1e-6);
        assert_relative_eq!(iso.mhdbt.get(m, 5).unwrap(), (m + 1) as Float, max_relative = 1e-6);
    }

    // The same thing, the long way
    let frame = TimeFrame::new();
    let mut solar = SolarRadiation::new(&frame, &epw);
    solar.calculate();
    assert_eq!(IsoWeatherData::from_averages(solar.averages()), iso);

    // Wellington is in the southern hemisphere, so the surface facing
    // the equator (azimuth 180) gets more sun in winter than the one facing south
    let winter = 6;
    assert!(iso.msolar.get(winter, 4).unwrap() > iso.msolar.get(winter, 0).unwrap());

    // The text version goes back and forth
    let text = epw.to_iso_string();
    let parsed: IsoWeatherData = text.parse().unwrap();
    assert_eq!(parsed, iso);
}
