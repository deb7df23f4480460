use heapkit::text::remove_duplicates;

fn main() {
    for input in ["Hello, my friend liam", "aabbcc", ""] {
        println!("{:?} -> {:?}", input, remove_duplicates(input));
    }
}

// Expected output:
// "Hello, my friend liam" -> "Helo, myfrinda"
// "aabbcc" -> "abc"
// "" -> ""
