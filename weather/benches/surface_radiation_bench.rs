use calendar::{TimeFrame, HOURS_PER_YEAR};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weather::{EpwData, Float, Location, Matrix, SolarRadiation, WeatherVariable};

fn synthetic_weather() -> EpwData {
    let mut data = Matrix::zeroes(WeatherVariable::ALL.len(), HOURS_PER_YEAR);
    for variable in WeatherVariable::ALL.iter() {
        for (i, v) in data.row_mut(variable.index()).iter_mut().enumerate() {
            let hour = (i % 24) as Float;
            *v = match variable {
                WeatherVariable::DirectBeam => (500. - 40. * (hour - 12.).abs()).max(0.),
                WeatherVariable::Diffuse => (120. - 10. * (hour - 12.).abs()).max(0.),
                _ => hour,
            };
        }
    }
    let location = Location {
        name: "Wellington".to_string(),
        station_id: "934360".to_string(),
        latitude: -41.33,
        longitude: 174.8,
        timezone: 12,
    };
    EpwData::new(location, data).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let frame = TimeFrame::new();
    let epw = synthetic_weather();

    c.bench_function("surface radiation, one year", |b| {
        b.iter(|| {
            let solar = SolarRadiation::new(&frame, &epw);
            black_box(solar.calculate_surface_solar_radiation());
        })
    });

    c.bench_function("climate averages, one year", |b| {
        let solar = SolarRadiation::new(&frame, &epw);
        let surfaces = solar.calculate_surface_solar_radiation();
        b.iter(|| black_box(solar.calculate_averages(&surfaces)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
