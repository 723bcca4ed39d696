//! Failing parses must release every node they built along the way. A
//! counting allocator tracks live allocations on the current thread.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use formula::language::Variables;
use formula::parsing;

struct Counting;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn adjust(delta: isize) {
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let pointer = unsafe { System.alloc(layout) };
        if !pointer.is_null() {
            adjust(1);
        }
        pointer
    }

    unsafe fn dealloc(&self, pointer: *mut u8, layout: Layout) {
        unsafe { System.dealloc(pointer, layout) };
        adjust(-1);
    }

    unsafe fn realloc(&self, pointer: *mut u8, layout: Layout, size: usize) -> *mut u8 {
        // a move, not a new allocation
        unsafe { System.realloc(pointer, layout, size) }
    }
}

#[global_allocator]
static ALLOCATOR: Counting = Counting;

fn live() -> isize {
    LIVE.with(|live| live.get())
}

fn variables() -> Variables {
    let mut variables = Variables::new();
    variables.add_numeric("x", 1.0);
    variables.add_numeric_array("v", vec![1.0, 2.0, 3.0]);
    variables.add_discrete(
        "colour",
        vec!["red".to_string(), "green".to_string()],
    );
    variables
}

// A single test, so that no other test thread shares the pattern's cache
// while allocations are being counted.
#[test]
fn parses_release_everything() {
    let variables = variables();

    let broken = [
        "sqrt(4",
        "max(1,2",
        "x*2 + sqrt(x)*q",
        "max(1, x, v) + 2",
        "(x+1)*(x+2)^(x+",
        "arctan2(x*2, v[1], 3)",
        "value(x)",
        "1 + 2 + 3 + 1e999",
    ];

    // first use compiles the literal pattern and registers log callsites
    for expr in broken {
        let _ = parsing::parse_function(expr, &variables, false);
    }
    let _ = parsing::parse_function("1.5", &variables, false);

    for expr in broken {
        let before = live();
        let result = parsing::parse_function(expr, &variables, false);
        assert!(result.is_err(), "{} should not parse", expr);
        drop(result);
        let after = live();

        assert_eq!(before, after, "{} leaked {} allocations", expr, after - before);
    }

    // successful parses hand over a tree that dropping releases in full
    let before = live();
    let function = parsing::parse_function("sqrt(x)*max(1, v[2], x+3)", &variables, false);
    assert!(function.is_ok());
    assert!(live() > before);

    drop(function);
    assert_eq!(live(), before);
}
