//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Klaimeer Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Klaimeer"
# width = 1280           # 200-7680
# height = 800           # 200-4320
# transparent = true
# decorations = true

[globe]
# enabled = true

[globe.camera]
# fov_degrees = 75.0     # 1.0-179.0
# near = 0.1
# far = 1000.0
# distance = 5.0

[globe.sphere]
# radius = 2.0
# width_segments = 64    # 3-512
# height_segments = 64   # 2-512
# opacity = 0.8          # 0.0-1.0

[globe.wireframe]
# color = "#10b981"
# opacity = 0.2

[globe.points]
# count = 1000           # 0-100000
# radius = 2.1
# size = 0.02
# color = "#10b981"
# opacity = 0.8
# seed = 42              # fixed layout; random per launch when unset

[globe.animation]
# time_step = 0.01
# sphere_spin = 0.002    # radians per frame
# points_spin = 0.001

[globe.renderer]
# antialias = true
# transparent = true
# vsync = true

[counters]
# enabled = true

# [[counters.entries]]
# label = "TAM"
# end = 150.0
# duration_secs = 2.0
# decimals = 0
# prefix = ""
# suffix = "B"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
