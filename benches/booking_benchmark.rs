use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hostel_booking::{BookingService, HostelBookingSystem, HostelConfig};
use rand::{thread_rng, Rng};

// Fill a hostel of the given size and confirm every request
pub fn fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_hostel");

    for floors in [2, 10, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(floors), floors, |b, &floors| {
            let config = HostelConfig {
                floors,
                rooms_per_floor: 20,
            };

            b.iter(|| {
                let mut hostel = HostelBookingSystem::new(config);
                let capacity = (floors * 20) as i32;

                for id in 0..capacity {
                    let _ = hostel.request_booking(id, "guest");
                }
                for _ in 0..capacity {
                    let _ = hostel.confirm_next();
                }

                black_box(hostel.stats())
            });
        });
    }

    group.finish();
}

// Random mix of requests, confirmations and cancellations against a busy hostel
pub fn churn_benchmark(c: &mut Criterion) {
    c.bench_function("churn", |b| {
        b.iter(|| {
            let mut rng = thread_rng();
            let mut hostel = HostelBookingSystem::new(HostelConfig {
                floors: 10,
                rooms_per_floor: 10,
            });

            for _ in 0..1000 {
                let id = rng.gen_range(0..200);
                match rng.gen_range(0..10) {
                    0..=4 => {
                        let _ = hostel.request_booking(id, "guest");
                    }
                    5..=7 => {
                        let _ = hostel.confirm_next();
                    }
                    _ => {
                        let _ = hostel.cancel_booking(id);
                    }
                }
            }

            black_box(hostel.snapshot())
        })
    });
}

criterion_group!(benches, fill_benchmark, churn_benchmark);
criterion_main!(benches);
