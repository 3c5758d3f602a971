//! The reference component tables shipped with the engine.

use maplit::btreemap;

use crate::{
    modules::catalog::Catalog,
    schemas::computing::{Category, Component, Tier},
};

pub fn builtin_catalog() -> Catalog {
    Catalog::default()
        .with_category(Category::Cpu, cpus())
        .with_category(Category::Gpu, gpus())
        .with_category(Category::Ram, ram())
        .with_category(Category::Storage, storage())
}

fn cpu(name: &str, score: u8, tier: Tier, passmark: u32, cores: &str, threads: &str, base: &str, boost: &str) -> Component {
    Component::new(name, score, tier)
        .with_passmark(passmark)
        .with_attributes(btreemap! {
            "cores" => cores,
            "threads" => threads,
            "base_clock" => base,
            "boost_clock" => boost,
        })
}

fn cpus() -> Vec<Component> {
    use Tier::*;
    vec![
        cpu("Intel Core i3-10100", 45, Low, 6543, "4", "8", "3.6GHz", "4.3GHz")
            .with_aliases(&["i3-10100", "i3"]),
        cpu("AMD Ryzen 3 3100", 43, Low, 6245, "4", "8", "3.6GHz", "3.9GHz")
            .with_aliases(&["ryzen 3", "r3 3100"]),
        cpu("Intel Pentium Gold G6400", 38, Low, 5512, "2", "4", "4.0GHz", "4.0GHz")
            .with_aliases(&["pentium", "g6400"]),
        cpu("AMD Athlon 3000G", 32, Low, 4640, "2", "4", "3.5GHz", "3.5GHz"),
        cpu("Intel Celeron G5905", 28, Low, 4060, "2", "2", "3.5GHz", "3.5GHz"),
        cpu("Intel Core i5-12400F", 72, Mid, 18543, "6", "12", "2.5GHz", "4.4GHz")
            .with_aliases(&["i5-12400", "i5"]),
        cpu("AMD Ryzen 5 5600X", 75, Mid, 19321, "6", "12", "3.7GHz", "4.6GHz")
            .with_aliases(&["ryzen 5", "r5 5600"]),
        cpu("Intel Core i5-11400", 68, Mid, 17532, "6", "12", "2.6GHz", "4.4GHz")
            .with_aliases(&["i5-11400"]),
        cpu("AMD Ryzen 5 5500", 65, Mid, 16754, "6", "12", "3.6GHz", "4.2GHz"),
        cpu("Intel Core i5-10400", 62, Mid, 15987, "6", "12", "2.9GHz", "4.3GHz"),
        cpu("AMD Ryzen 7 7800X3D", 95, High, 34567, "8", "16", "4.2GHz", "5.0GHz")
            .with_attribute("cache", "96MB L3")
            .with_aliases(&["ryzen 7", "r7 7800"]),
        cpu("Intel Core i9-13900K", 98, High, 35678, "24", "32", "3.0GHz", "5.8GHz")
            .with_aliases(&["i9-13900", "i9"]),
        cpu("AMD Ryzen 9 7950X", 96, High, 34987, "16", "32", "4.5GHz", "5.7GHz")
            .with_aliases(&["ryzen 9", "r9 7950"]),
        cpu("Intel Core i7-13700K", 88, High, 32000, "16", "24", "3.4GHz", "5.4GHz"),
        cpu("AMD Ryzen 7 7700X", 85, High, 31000, "8", "16", "4.5GHz", "5.4GHz"),
    ]
}

fn gpu(name: &str, score: u8, tier: Tier, passmark: u32, vram: &str, bus: &str) -> Component {
    unbenched_gpu(name, score, tier, vram, bus).with_passmark(passmark)
}

fn unbenched_gpu(name: &str, score: u8, tier: Tier, vram: &str, bus: &str) -> Component {
    Component::new(name, score, tier).with_attributes(btreemap! {
        "vram" => vram,
        "memory_bus" => bus,
    })
}

fn gpus() -> Vec<Component> {
    use Tier::*;
    vec![
        gpu("NVIDIA GTX 1650", 38, Low, 8245, "4GB GDDR5", "128-bit")
            .with_aliases(&["1650", "gtx 1650"]),
        gpu("AMD Radeon RX 6400", 35, Low, 7600, "4GB GDDR6", "64-bit")
            .with_aliases(&["6400", "rx 6400"]),
        gpu("NVIDIA GT 1030", 25, Low, 5423, "2GB GDDR5", "64-bit"),
        gpu("AMD Radeon RX 550", 22, Low, 4772, "2GB GDDR5", "128-bit"),
        gpu("NVIDIA GTX 1050 Ti", 32, Low, 6942, "4GB GDDR5", "128-bit")
            .with_aliases(&["1050 ti", "gtx 1050"]),
        gpu("NVIDIA RTX 3060", 68, Mid, 14765, "12GB GDDR6", "192-bit")
            .with_aliases(&["3060", "rtx 3060"]),
        gpu("AMD Radeon RX 6600", 65, Mid, 14123, "8GB GDDR6", "128-bit")
            .with_aliases(&["6600", "rx 6600"]),
        gpu("NVIDIA RTX 3060 Ti", 72, Mid, 15643, "8GB GDDR6", "256-bit")
            .with_aliases(&["3060 ti", "rtx 3060 ti"]),
        gpu("AMD Radeon RX 6650 XT", 70, Mid, 15200, "8GB GDDR6", "128-bit"),
        gpu("NVIDIA RTX 4060", 67, Mid, 14567, "8GB GDDR6", "128-bit"),
        gpu("NVIDIA RTX 4090", 98, High, 38654, "24GB GDDR6X", "384-bit")
            .with_aliases(&["4090", "rtx 4090"]),
        gpu("NVIDIA RTX 4080 SUPER", 92, High, 36234, "16GB GDDR6X", "256-bit"),
        gpu("AMD Radeon RX 7900 XTX", 90, High, 35432, "24GB GDDR6", "384-bit")
            .with_aliases(&["7900 xtx", "rx 7900"]),
        gpu("NVIDIA RTX 4070 Ti SUPER", 85, High, 33456, "16GB GDDR6X", "256-bit"),
        gpu("AMD Radeon RX 7900 XT", 83, High, 32765, "20GB GDDR6", "320-bit"),
        unbenched_gpu("NVIDIA RTX 3090", 94, High, "24GB GDDR6X", "384-bit")
            .with_aliases(&["3090", "rtx 3090"]),
    ]
}

fn stick(name: &str, score: u8, tier: Tier, speed: &str, capacity: &str, kind: &str) -> Component {
    Component::new(name, score, tier)
        .with_passmark(u32::from(score) * 100)
        .with_attributes(btreemap! {
            "speed" => speed,
            "capacity" => capacity,
            "type" => kind,
        })
}

fn ram() -> Vec<Component> {
    use Tier::*;
    vec![
        stick("DDR4 2666MHz 8GB", 28, Low, "2666MHz", "8GB", "DDR4"),
        stick("DDR4 2400MHz 8GB", 25, Low, "2400MHz", "8GB", "DDR4"),
        stick("DDR4 2133MHz 8GB", 22, Low, "2133MHz", "8GB", "DDR4"),
        stick("DDR4 2666MHz 4GB", 20, Low, "2666MHz", "4GB", "DDR4"),
        stick("DDR3 1600MHz 8GB", 18, Low, "1600MHz", "8GB", "DDR3"),
        stick("DDR4 3200MHz 16GB", 55, Mid, "3200MHz", "16GB", "DDR4"),
        stick("DDR4 3600MHz 16GB", 60, Mid, "3600MHz", "16GB", "DDR4"),
        stick("DDR5 4800MHz 16GB", 65, Mid, "4800MHz", "16GB", "DDR5"),
        stick("DDR5 5200MHz 16GB", 68, Mid, "5200MHz", "16GB", "DDR5"),
        stick("DDR4 3200MHz 32GB", 58, Mid, "3200MHz", "32GB", "DDR4"),
        stick("DDR5 6000MHz 32GB", 85, High, "6000MHz", "32GB", "DDR5").with_attribute("timings", "CL30"),
        stick("DDR5 6400MHz 32GB", 88, High, "6400MHz", "32GB", "DDR5").with_attribute("timings", "CL32"),
        stick("DDR5 7200MHz 32GB", 92, High, "7200MHz", "32GB", "DDR5").with_attribute("timings", "CL34"),
        stick("DDR5 5600MHz 32GB", 80, High, "5600MHz", "32GB", "DDR5").with_attribute("timings", "CL28"),
        stick("DDR5 6000MHz 64GB", 87, High, "6000MHz", "64GB", "DDR5").with_attribute("timings", "CL30"),
    ]
}

fn drive(name: &str, score: u8, tier: Tier, passmark: u32, kind: &str, read: &str, write: &str) -> Component {
    Component::new(name, score, tier)
        .with_passmark(passmark)
        .with_attributes(btreemap! {
            "type" => kind,
            "read_speed" => read,
            "write_speed" => write,
        })
}

fn storage() -> Vec<Component> {
    use Tier::*;
    vec![
        drive("Kingston A400 240GB SSD", 25, Low, 2500, "SATA SSD", "500MB/s", "350MB/s"),
        drive("WD Blue 1TB HDD", 15, Low, 1500, "HDD", "150MB/s", "150MB/s"),
        drive("Crucial BX500 480GB SSD", 28, Low, 2800, "SATA SSD", "540MB/s", "500MB/s"),
        drive("Seagate BarraCuda 1TB HDD", 14, Low, 1400, "HDD", "140MB/s", "140MB/s"),
        drive("SanDisk SSD Plus 240GB", 24, Low, 2400, "SATA SSD", "530MB/s", "310MB/s"),
        drive("Samsung 970 EVO Plus 500GB", 65, Mid, 18500, "NVMe SSD", "3500MB/s", "3200MB/s"),
        drive("WD Blue SN550 1TB NVMe", 62, Mid, 17700, "NVMe SSD", "2400MB/s", "1950MB/s"),
        drive("Crucial P2 1TB NVMe", 58, Mid, 16500, "NVMe SSD", "2400MB/s", "1800MB/s"),
        drive("Kingston NV1 1TB", 55, Mid, 15700, "NVMe SSD", "2100MB/s", "1700MB/s"),
        drive("Sabrent Rocket 512GB", 60, Mid, 17100, "NVMe SSD", "3400MB/s", "2900MB/s"),
        drive("Samsung 990 Pro 1TB", 92, High, 26200, "NVMe SSD PCIe 4.0", "7450MB/s", "6900MB/s"),
        drive("WD Black SN850X 1TB", 90, High, 25600, "NVMe SSD PCIe 4.0", "7300MB/s", "6300MB/s"),
        drive("Seagate FireCuda 530 1TB", 88, High, 25100, "NVMe SSD PCIe 4.0", "7300MB/s", "6000MB/s"),
        drive("Samsung 980 Pro 1TB", 85, High, 24200, "NVMe SSD PCIe 4.0", "7000MB/s", "5000MB/s"),
        drive("Sabrent Rocket 4 Plus 1TB", 87, High, 24800, "NVMe SSD PCIe 4.0", "7100MB/s", "6600MB/s"),
    ]
}
