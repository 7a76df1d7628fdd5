use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rustx_i18n::i18n::loader::with_unmarshal;
use rustx_i18n::{FsLoader, Loader, MemorySource, MessageCatalog, SourceTree};
use std::sync::Arc;

const LOCALES: [&str; 8] = ["en", "fr", "de", "ja", "zh-CN", "pt-BR", "es", "it"];

// ========== 辅助函数 ==========

fn generate_messages(n: usize) -> String {
    let body: Vec<String> = (0..n)
        .map(|i| format!(r#""key_{:06}": "value_{:06}""#, i, i))
        .collect();
    format!("{{{}}}", body.join(","))
}

/// 每个语言一个目录，每个目录 `files` 个文件
fn generate_source(files: usize, messages: usize) -> MemorySource {
    let content = generate_messages(messages);
    let mut source = MemorySource::new();
    for locale in LOCALES {
        for i in 0..files {
            source.insert(&format!("module_{:03}/{}.json", i, locale), content.as_str());
        }
    }
    source
}

// ========== 遍历 + 解析 ==========

fn benchmark_parse_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_message");

    for files in [1, 10, 100] {
        let source: Arc<dyn SourceTree> = Arc::new(generate_source(files, 100));
        let loader = FsLoader::with_source(
            source,
            [with_unmarshal("json", |buf| Ok(serde_json::from_slice(buf)?))],
        );

        group.bench_with_input(BenchmarkId::from_parameter(files), &files, |b, _| {
            b.iter(|| {
                let mut catalog = MessageCatalog::new();
                loader.parse_message(&mut catalog).unwrap();
                black_box(catalog);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse_message);
criterion_main!(benches);
