// unit tests

use super::*;

const RDOT_LOG: &str = "\
Linux host 6.5.0-41-generic #41-Ubuntu SMP x86_64 GNU/Linux
model name\t: Intel(R) Core(TM) i7-13700K CPU @ 3.40GHz
Running Rdot benchmarks
4 1024 128
/usr/bin/time ./Rdot_gmp_C_native_01 1024 128
Elapsed time: 0.5 s
MFLOPS: 4.1
L1 Norm of difference: 0
Result OK
0.49user 0.00system 0:00.50elapsed 99%CPU
/usr/bin/time ./Rdot_gmp_kernel_01_orig 1024 128
Elapsed time: 0.25 s
MFLOPS: 8.2
/usr/bin/time ./Rdot_gmp_kernel_openmp_01_mkII 1024 128
Elapsed time: 1.5e-02 s
MFLOPS: 136.5
/usr/bin/time ./Rdot_gmp_kernel_openmp_01_mkIISR 1024 128
Elapsed time: 0.01 s
MFLOPS: 204.8
";

const RGEMV_LOG: &str = "\
Linux
AMD Ryzen Threadripper PRO 5995WX 64-Cores
--
Rgemv 2000 3000 512
./Rgemv_gmp_kernel_01_mkII 2000 3000 512
Elapsed time: 2.25 s
MFLOPS: 5.3
./Rgemv_gmp_kernel_01_mkII 2000 512
Elapsed time: 9.0 s
";

const INNER_PRODUCT_LOG: &str = "\
FreeBSD 14.0-RELEASE
Intel(R) Xeon(R) Gold 6248 CPU
x
N prec 100000 512
./inner_product_gmp_10_naive 100000 512
Elapsed time: 0.031 s
Dot product: 1.234e+05
./inner_product_gmp_13_mpblas_openmp 100000 512
Elapsed time: 0.004 s
Dot product: 1.234e+05
";

// family

#[test]
fn detect_family_test() {
  assert_eq!(Family::detect(RDOT_LOG), Some(Family::Rdot));
  assert_eq!(Family::detect(RGEMV_LOG), Some(Family::Rgemv));
  assert_eq!(Family::detect(INNER_PRODUCT_LOG), Some(Family::InnerProduct));
  assert_eq!(Family::detect("nothing to see here"), None);
}

#[test]
fn family_from_str_test() {
  assert_eq!("rgemv".parse::<Family>().unwrap(), Family::Rgemv);
  assert_eq!("Inner_Product".parse::<Family>().unwrap(), Family::InnerProduct);
  assert!(matches!(
    "rgemm".parse::<Family>(),
    Err(LogError::UnknownFamily(_))
  ));
}

// records

#[test]
fn extracts_every_triplet_in_order() {
  let records = extract_records(RDOT_LOG, Family::Rdot).unwrap();
  let operations: Vec<&str> = records.iter().map(|r| r.operation.as_str()).collect();

  assert_eq!(
    operations,
    [
      "C_native_01",
      "kernel_01_orig",
      "kernel_openmp_01_mkII",
      "kernel_openmp_01_mkIISR"
    ]
  );
  assert_eq!(records[0].elapsed_seconds, 0.5);
  assert_eq!(records[0].throughput_mflops, Some(4.1));
  assert_eq!(records[2].elapsed_seconds, 0.015);
  assert_eq!(records[3].throughput_mflops, Some(204.8));
}

#[test]
fn throughput_line_is_optional() {
  let records = extract_records(INNER_PRODUCT_LOG, Family::InnerProduct).unwrap();

  assert_eq!(records.len(), 2);
  assert_eq!(records[0].operation, "10_naive");
  assert_eq!(records[1].elapsed_seconds, 0.004);
  assert!(records.iter().all(|r| r.throughput_mflops.is_none()));
}

#[test]
fn argument_count_follows_family_arity() {
  // the second invocation is missing a dimension and must not match
  let records = extract_records(RGEMV_LOG, Family::Rgemv).unwrap();

  assert_eq!(records.len(), 1);
  assert_eq!(records[0].operation, "kernel_01_mkII");
  assert_eq!(records[0].throughput_mflops, Some(5.3));
}

#[test]
fn crlf_logs_are_accepted() {
  let text = RDOT_LOG.replace('\n', "\r\n");
  let records = extract_records(&text, Family::Rdot).unwrap();

  assert_eq!(records.len(), 4);
  assert_eq!(records[1].throughput_mflops, Some(8.2));
}

#[test]
fn other_family_records_are_ignored() {
  assert!(extract_records(RDOT_LOG, Family::Raxpy).unwrap().is_empty());
}

// classification

#[test]
fn classification_priority_test() {
  assert_eq!(
    OperationClass::of("kernel_openmp_01_mkIISR"),
    OperationClass::OptimizedBindingWithScratchReuse
  );
  assert_eq!(
    OperationClass::of("kernel_01_mkII"),
    OperationClass::OptimizedBinding
  );
  assert_eq!(
    OperationClass::of("kernel_01_orig"),
    OperationClass::OriginalBinding
  );
  assert_eq!(
    OperationClass::of("C_native_01"),
    OperationClass::NativeReference
  );
}

#[test]
fn parallel_flag_is_independent_of_class() {
  assert!(is_parallel("C_native_openmp_01"));
  assert!(!is_parallel("kernel_01_mkIISR"));
  assert_eq!(
    OperationClass::of("C_native_openmp_01"),
    OperationClass::NativeReference
  );
}

// header

#[test]
fn one_dimension_header_test() {
  let env = Environment::from_header(&["Linux", "cpu", "", "4 8192 256"], Arity::One).unwrap();

  assert_eq!(env.os_name, "Linux");
  assert_eq!(env.dimension, 8192);
  assert_eq!(env.dimension_x, None);
  assert_eq!(env.precision_bits, 256);
}

#[test]
fn two_dimension_header_test() {
  let env = Environment::from_header(
    &["Linux", "cpu", "", "randomtoken 1024 8192 256"],
    Arity::Two,
  )
  .unwrap();

  assert_eq!(env.dimension_x, Some(1024));
  assert_eq!(env.dimension, 8192);
  assert_eq!(env.precision_bits, 256);
}

#[test]
fn short_header_is_malformed() {
  let err = Environment::from_header(&["Linux", "cpu", ""], Arity::One).unwrap_err();
  assert!(matches!(err, LogError::MalformedHeader(_)));

  let err = Environment::from_header(&["Linux", "cpu", "", "1024 128"], Arity::Two).unwrap_err();
  assert!(matches!(err, LogError::MalformedHeader(_)));
}

#[test]
fn non_numeric_or_zero_shape_is_malformed() {
  for shape in ["4 1024 bits", "4 0 128", "4 1024 -128"] {
    let result = Environment::from_header(&["Linux", "cpu", "", shape], Arity::One);
    assert!(
      matches!(result, Err(LogError::MalformedHeader(_))),
      "{shape:?} accepted"
    );
  }
}

#[test]
fn blank_os_line_falls_back() {
  let env = Environment::from_header(&["", "cpu", "", "1 2"], Arity::One).unwrap();
  assert_eq!(env.os_name, "Unknown");
}

// cpu names

#[test]
fn sanitize_intel_name() {
  let name = sanitize_cpu_model("model name\t: 13th Gen Intel(R) Core(TM) i7-13700K CPU @ 3.40GHz");

  assert_eq!(name, "Core i7-13700K @ 3.40GHz");
  assert_eq!(filename_safe(&name), "Core_i7-13700K_@_3.40GHz");
}

#[test]
fn sanitize_amd_name() {
  assert_eq!(
    sanitize_cpu_model("AMD Ryzen Threadripper PRO 5995WX 64-Cores"),
    "Ryzen PRO 5995WX 64-Cores"
  );
  assert_eq!(
    sanitize_cpu_model("AMD EPYC 7763 64-Core Processor"),
    "EPYC 7763 64-Core"
  );
}

#[test]
fn sanitize_drops_non_ascii() {
  assert_eq!(
    sanitize_cpu_model("Apple\u{a0}M2\u{2122}  Max\t\u{7f}"),
    "AppleM2 Max"
  );
}

#[test]
fn sanitize_keeps_tokens_around_symbols_whole() {
  assert_eq!(
    sanitize_cpu_model("Xeon\u{ae}Gold i7\u{2122}-13700K"),
    "XeonGold i7-13700K"
  );
}

#[test]
fn sanitize_is_idempotent() {
  let names = [
    "Intel(R) Core(TM) i7-13700K CPU",
    "model Intel name",
    "Int(R)el Xeon",
    "GGenen CPU:CPU",
    "Xeon\u{ae}Gold i7\u{2122}-13700K",
    "  12th  Gen  Intel(R)  Core(TM)  i9-12900K  ",
    "",
  ];

  for raw in names {
    let once = sanitize_cpu_model(raw);
    assert_eq!(sanitize_cpu_model(&once), once, "raw: {raw:?}");
  }
}

#[test]
fn cpuinfo_without_model_name() {
  let raw = raw_cpu_model_from_cpuinfo("processor\t: 0\nvendor_id\t: GenuineIntel\n");

  assert_eq!(raw, UNKNOWN_CPU_MODEL);
  assert_eq!(sanitize_cpu_model(&raw), "Unknown Model");
}

#[test]
fn cpuinfo_first_model_name_wins() {
  let cpuinfo = "processor\t: 0\nmodel name\t: AMD Ryzen 9 7950X 16-Core Processor\n\
    processor\t: 1\nmodel name\t: something else\n";

  assert_eq!(
    raw_cpu_model_from_cpuinfo(cpuinfo),
    "AMD Ryzen 9 7950X 16-Core Processor"
  );
}

// whole log

#[test]
fn parse_rdot_log_test() {
  let log = BenchmarkLog::parse(RDOT_LOG, Family::Rdot).unwrap();

  assert_eq!(log.environment.os_name, "Linux");
  assert_eq!(log.environment.cpu_model, "Core i7-13700K @ 3.40GHz");
  assert_eq!(log.environment.dimension, 1024);
  assert_eq!(log.environment.precision_bits, 128);
  assert_eq!(log.records.len(), 4);
  assert_eq!(log.parallel_records().count(), 2);
}

#[test]
fn from_lines_matches_parse() {
  let lines: Vec<&str> = RGEMV_LOG.lines().collect();
  let from_lines = BenchmarkLog::from_lines(&lines, Family::Rgemv).unwrap();

  assert_eq!(from_lines, BenchmarkLog::parse(RGEMV_LOG, Family::Rgemv).unwrap());
  assert_eq!(from_lines.environment.dimension_x, Some(2000));
  assert_eq!(from_lines.environment.cpu_model, "Ryzen PRO 5995WX 64-Cores");
}

#[test]
fn header_only_log_has_no_records() {
  let log = BenchmarkLog::from_lines(&["Linux", "cpu", "", "4 1024 128"], Family::Rdot).unwrap();
  assert!(log.records.is_empty());
}
