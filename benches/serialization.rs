use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_envfile::{
    env_fields, template_string, to_string, to_string_with_options, EnvOptions, EnvStruct, Field,
};

struct Metadata {
    created: String,
    updated: Option<String>,
    version: u32,
}

impl EnvStruct for Metadata {
    fn fields() -> Vec<Field<Self>> {
        env_fields! {
            leaf "Created" => |m: &Metadata| &m.created;
            leaf "Updated" => |m: &Metadata| &m.updated;
            leaf "Version" => |m: &Metadata| &m.version;
        }
    }
}

struct Service {
    id: u32,
    name: String,
    email: String,
    active: bool,
    metadata: Metadata,
}

impl EnvStruct for Service {
    fn fields() -> Vec<Field<Self>> {
        env_fields! {
            leaf "Id" => |s: &Service| &s.id;
            leaf "Name" => |s: &Service| &s.name;
            leaf "Email" => |s: &Service| &s.email;
            leaf "Active" => |s: &Service| &s.active;
            nested "Metadata" => |s: &Service| Some(&s.metadata);
        }
    }
}

struct Level {
    value: u64,
    next: Option<Box<Level2>>,
}

struct Level2 {
    value: u64,
    next: Option<Box<Level3>>,
}

struct Level3 {
    value: u64,
}

impl EnvStruct for Level {
    fn fields() -> Vec<Field<Self>> {
        env_fields! {
            leaf "Value" => |l: &Level| &l.value;
            nested "Next" => |l: &Level| l.next.as_deref();
        }
    }
}

impl EnvStruct for Level2 {
    fn fields() -> Vec<Field<Self>> {
        env_fields! {
            leaf "Value" => |l: &Level2| &l.value;
            nested "Next" => |l: &Level2| l.next.as_deref();
        }
    }
}

impl EnvStruct for Level3 {
    fn fields() -> Vec<Field<Self>> {
        env_fields! {
            leaf "Value" => |l: &Level3| &l.value;
        }
    }
}

fn service() -> Service {
    Service {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: None,
            version: 7,
        },
    }
}

fn benchmark_serialize_flat_and_nested(c: &mut Criterion) {
    let service = service();

    c.bench_function("serialize_service", |b| {
        b.iter(|| to_string(black_box(&service)))
    });

    c.bench_function("serialize_service_commented", |b| {
        b.iter(|| to_string_with_options(black_box(&service), EnvOptions::commented()))
    });
}

fn benchmark_serialize_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_depth");

    let nested = Level {
        value: 1,
        next: Some(Box::new(Level2 {
            value: 2,
            next: Some(Box::new(Level3 { value: 3 })),
        })),
    };
    let shallow = Level {
        value: 1,
        next: None,
    };

    for (label, level) in [("full", &nested), ("absent_children", &shallow)] {
        group.bench_with_input(BenchmarkId::from_parameter(label), level, |b, level| {
            b.iter(|| to_string_with_options(black_box(level), EnvOptions::commented()))
        });
    }

    group.finish();
}

fn benchmark_template(c: &mut Criterion) {
    c.bench_function("template_service", |b| {
        b.iter(|| template_string::<Service>(black_box(EnvOptions::commented())))
    });
}

criterion_group!(
    benches,
    benchmark_serialize_flat_and_nested,
    benchmark_serialize_depth,
    benchmark_template
);
criterion_main!(benches);
