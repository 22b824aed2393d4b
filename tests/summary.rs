use approx::assert_relative_eq;
use isoclimate::{
    summarize, Float, IsoWeatherData, Options, RadiationOptions, TimeFrame, NUM_SURFACES,
};
use std::io::Write;

/// Writes a year of constant, sunny-ish weather
fn write_epw(dir: &std::path::Path) -> std::path::PathBuf {
    let frame = TimeFrame::new();
    let mut s = String::from("LOCATION,BARCELONA,-,ESP,IWEC Data,081810,41.28,2.07,1.0,6.0\n");
    for _ in 0..7 {
        s.push_str("COMMENTS 1,nothing\n");
    }
    for i in 0..frame.len() {
        let hour = frame.hour(i);
        let (eb, ed) = if (8..=17).contains(&hour) {
            (600, 100)
        } else {
            (0, 0)
        };
        s.push_str(&format!(
            "2001,{},{},{},60,?9?9,18.5,9,60,101000,0,0,300,{},{},{},0,0,0,0,90,2.5,0,0\n",
            frame.month(i),
            frame.day(i),
            hour,
            eb / 2 + ed,
            eb,
            ed
        ));
    }
    let path = dir.join("barcelona.epw");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(s.as_bytes()).unwrap();
    path
}

#[test]
fn test_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_epw(dir.path());

    let iso = summarize(&path, &Options::default()).unwrap();
    assert_eq!(iso.msolar.size(), (12, NUM_SURFACES));
    assert_eq!(iso.mhdbt.size(), (12, 24));
    assert_eq!(iso.mh_egh.size(), (12, 24));
    for m in 0..12 {
        assert_relative_eq!(iso.mdbt[m], 18.5, max_relative = 1e-6);
        assert_relative_eq!(iso.mwind[m], 2.5, max_relative = 1e-6);
        for s in 0..NUM_SURFACES {
            assert!(iso.msolar.get(m, s).unwrap() > 0.);
        }
    }

    // Northern hemisphere: the south facade gets more in winter
    assert!(iso.msolar.get(0, 0).unwrap() > iso.msolar.get(0, 4).unwrap());

    let text = iso.to_iso_string();
    let back: IsoWeatherData = text.parse().unwrap();
    assert_eq!(back, iso);
}

#[test]
fn test_summary_with_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_epw(dir.path());

    let vertical = summarize(&path, &Options::default()).unwrap();

    // A black ground reflects nothing, so every surface gets less
    let options = Options {
        radiation: RadiationOptions {
            ground_reflectivity: 0.0,
            ..RadiationOptions::default()
        },
        ..Options::default()
    };
    let black = summarize(&path, &options).unwrap();
    for m in 0..12 {
        for s in 0..NUM_SURFACES {
            assert!(black.msolar.get(m, s).unwrap() < vertical.msolar.get(m, s).unwrap());
        }
    }

    // Horizontal surfaces all look the same
    let options = Options {
        radiation: RadiationOptions {
            doubled_surface_tilt: 0.0,
            ..RadiationOptions::default()
        },
        ..Options::default()
    };
    let horizontal = summarize(&path, &options).unwrap();
    for m in 0..12 {
        let first: Float = horizontal.msolar.get(m, 0).unwrap();
        for s in 1..NUM_SURFACES {
            assert_relative_eq!(horizontal.msolar.get(m, s).unwrap(), first, max_relative = 1e-9);
        }
    }
}
