#![feature(test)]

extern crate test;

use rs_mastermind_solver::*;
use test::Bencher;

#[bench]
fn bench_get_feedback_for_guess_correct(b: &mut Bencher) {
    let secret = Code::from([0, 1, 2, 3]);
    b.iter(|| get_feedback_for_guess(&secret, &secret))
}

#[bench]
fn bench_get_feedback_for_guess_partial(b: &mut Bencher) {
    let secret = Code::from([0, 0, 1, 2]);
    let guess = Code::from([1, 0, 0, 3]);
    b.iter(|| get_feedback_for_guess(&secret, &guess))
}
