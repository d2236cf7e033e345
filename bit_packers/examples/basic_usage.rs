use bit_packers::{GroupCodec, Octet, Quad, pack_2x4b, pack_4x6b, unpack_2x4b, unpack_4x6b};

fn main() {
    println!("=== Bit Packers Examples ===\n");

    // Example 1: Two nibbles per byte
    example_nibbles();

    // Example 2: 6-bit palette indices
    example_palette();

    // Example 3: 7-bit ASCII, checked
    if let Err(e) = example_ascii() {
        println!("  Error: {}", e);
    }
}

fn example_nibbles() {
    println!("Example 1: Packing two 4-bit digits into one byte");

    let digits = [0x7, 0xE];
    let block = pack_2x4b(digits);

    println!("  Digits:   {:?}", digits);
    println!("  Packed:   0b{:08b}", block);
    println!("  Unpacked: {:?}", unpack_2x4b(block));
    println!();
}

fn example_palette() {
    println!("Example 2: Four 6-bit palette indices in three bytes");

    let indices = [39, 26, 62, 17];
    let packed = pack_4x6b(indices);

    println!("  Indices:  {:?}", indices);
    for (i, block) in packed.iter().enumerate() {
        println!("  Block {}:  0b{:08b}", i, block);
    }
    println!("  Unpacked: {:?}", unpack_4x6b(packed));
    println!();
}

fn example_ascii() -> Result<(), bit_packers::BitPackError> {
    println!("Example 3: 7-bit ASCII, eight characters in seven bytes");

    let text = *b"bedrock!";
    let packed = Octet::try_pack(text)?;
    let restored = Octet::unpack(packed);

    println!("  Text:     {}", String::from_utf8_lossy(&text));
    println!("  Packed:   {} bytes -> {} bytes", Octet::SAMPLES, Octet::BLOCKS);
    println!("  Restored: {}", String::from_utf8_lossy(&restored));

    let savings = 100.0 * (1.0 - Octet::BLOCKS as f64 / Octet::SAMPLES as f64);
    println!("  Savings:  {:.1}%", savings);

    // Non-ASCII input is rejected instead of corrupting the first character.
    let bad = *b"caf\xC3\xA9!!!";
    match Octet::try_pack(bad) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  Rejected: {}", e),
    }

    let quad = Quad::try_pack([1, 2, 3, 64]);
    println!("  Quad with 64: {:?}", quad);

    Ok(())
}
