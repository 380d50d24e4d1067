use crate::models::Question;

fn q(topic: &str, prompt: &str, options: &[&str], correct_index: usize) -> Question {
    Question::new(
        topic,
        prompt,
        options.iter().map(|s| s.to_string()).collect(),
        correct_index,
    )
}

/// The built-in question store. Returns a freshly constructed list with the
/// same content on every call, in authoring order.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        q(
            "Loops",
            "What do Rust's loop constructs do?",
            &[
                "They repeat a block of statements while a condition holds.",
                "They store key-value pairs.",
                "They handle panics and unwinding.",
                "They initialize struct fields.",
            ],
            0,
        ),
        q(
            "Loops",
            "What is a for loop used for?",
            &[
                "Declaring lifetimes on references.",
                "Iterating over anything that implements IntoIterator, without manual indexing.",
                "Spawning background threads.",
                "Aliasing a while loop.",
            ],
            1,
        ),
        q(
            "I/O",
            "How do you handle repeated user input on the console?",
            &[
                "Call println! and inspect its return value.",
                "Generate the input with the rand crate.",
                "Read lines from stdin in a loop and validate each one.",
                "It is not possible without unsafe code.",
            ],
            2,
        ),
        q(
            "Control Flow",
            "How is match different from a chain of if-else?",
            &[
                "match tests one value against patterns exhaustively; if-else chains test arbitrary boolean conditions.",
                "match is always slower than if-else.",
                "match can only be used on integers.",
                "if-else cannot be nested.",
            ],
            0,
        ),
        q(
            "Collections",
            "What does std::collections provide?",
            &[
                "GUI widgets for desktop apps.",
                "File handling types.",
                "Networking primitives.",
                "Data structures such as Vec, HashMap, and BTreeSet.",
            ],
            3,
        ),
        q(
            "Vec",
            "What is a Vec<T>?",
            &[
                "A growable, heap-allocated array type.",
                "A doubly linked list.",
                "A hash table keyed by T.",
                "A fixed-size stack-allocated array.",
            ],
            0,
        ),
        q(
            "Iterators",
            "How do you consume an iterator by hand?",
            &[
                "Index into it with get(i).",
                "Call next() until it returns None.",
                "Call collect() repeatedly.",
                "Dereference it in a while loop.",
            ],
            1,
        ),
        q(
            "Map",
            "What is a HashMap?",
            &[
                "An ordered list that allows duplicate entries.",
                "A sorted set of unique elements.",
                "A collection mapping keys to values, with no duplicate keys.",
                "A type for memory-mapped file I/O.",
            ],
            2,
        ),
        q(
            "Sorting",
            "How do you sort a Vec?",
            &[
                "Call vec.sort() or vec.sort_by(comparator).",
                "Call std::mem::sort(vec).",
                "Sorting happens automatically on push.",
                "Call vec.shuffle() twice.",
            ],
            0,
        ),
        q(
            "Shuffling",
            "How do you shuffle the elements of a slice?",
            &[
                "Call slice.reverse() in a loop.",
                "Call slice.sort() with a random comparator.",
                "Rust slices cannot be reordered.",
                "Use SliceRandom::shuffle from the rand crate.",
            ],
            3,
        ),
    ]
}
