//! Built-in datasets, selectable from the "Samples" menu. They go through the
//! same parser as file contents.

/// A named sample dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub text: &'static str,
}

pub const HUBBLE_1929: Sample = Sample {
    name: "Hubble 1929",
    text: "\
# Hubble, E. (1929) A relation between distance and radial velocity
# among extra-galactic nebulae. PNAS 15(3), 168-173, Table 1.
# distance: Mpc, velocity: km/s
distance velocity
0.032 170
0.034 290
0.214 -130
0.263 -70
0.275 -185
0.275 -220
0.45 200
0.5 290
0.5 270
0.63 200
0.8 300
0.9 -30
0.9 650
0.9 150
0.9 500
1.0 920
1.1 450
1.1 500
1.4 500
1.7 960
2.0 500
2.0 850
2.0 800
2.0 1090
",
};

pub const GLOBAL_TEMPERATURE: Sample = Sample {
    name: "Global temperature anomaly",
    text: "\
Global Land and Ocean Temperature Anomalies, January-December
Units: Degrees Celsius
Base Period: 1901-2000
Missing: -999
Year,Anomaly
1880,-0.12
1885,-0.24
1890,-0.32
1895,-0.22
1900,-0.08
1905,-0.26
1910,-0.41
1915,-0.13
1920,-0.25
1925,-0.20
1930,-0.13
1935,-0.18
1940,0.05
1945,0.06
1950,-0.19
1955,-0.17
1960,-0.03
1965,-0.10
1970,0.01
1975,-0.03
1980,0.23
1985,0.08
1990,0.39
1995,0.37
2000,0.37
2005,0.63
2010,0.70
2015,0.90
2020,0.98
",
};

pub const SEA_LEVEL: Sample = Sample {
    name: "Sea level",
    text: "\
# Global average absolute sea level change, five-year steps
# Units: inches, relative to the 1880 level
Year\tLevel
1880\t0.00
1885\t0.35
1890\t0.48
1895\t0.45
1900\t0.62
1905\t0.76
1910\t0.92
1915\t1.20
1920\t1.31
1925\t1.39
1930\t1.70
1935\t2.02
1940\t2.23
1945\t2.51
1950\t2.83
1955\t3.12
1960\t3.28
1965\t3.60
1970\t3.88
1975\t4.15
1980\t4.38
1985\t4.73
1990\t5.07
1995\t5.60
2000\t6.17
2005\t6.78
2010\t7.46
",
};

pub const ALL: [Sample; 3] = [HUBBLE_1929, GLOBAL_TEMPERATURE, SEA_LEVEL];
