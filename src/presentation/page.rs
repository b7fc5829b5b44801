// Dashboard page: replays the service's map and plots with Leaflet and Plotly
pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Qualidade do Ar</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: Arial, sans-serif; background: #f4f6f8; color: #333; }
        header { padding: 1rem 1.5rem; background: #fff; border-bottom: 1px solid #e2e8f0; }
        h1 { font-size: 1.25rem; font-weight: 600; }
        main { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; padding: 1rem; }
        #mapa { height: 420px; border-radius: 0.5rem; background: #fff; }
        .graph { min-height: 420px; background: #fff; border-radius: 0.5rem; }
        .custom-div-icon { background: transparent; border: none; }
        @media (max-width: 900px) { main { grid-template-columns: 1fr; } }
    </style>
</head>
<body>
    <header><h1>Monitoramento da Qualidade do Ar</h1></header>
    <main>
        <div id="mapa"></div>
        <div id="poluentes-graph" class="graph"></div>
        <div id="meteo-graph" class="graph"></div>
        <div id="qualidade-ar-graph" class="graph"></div>
    </main>
    <script>
        async function getJson(url, options) {
            const response = await fetch(url, options);
            const body = await response.json();
            if (!response.ok) {
                throw new Error(body.error || response.statusText);
            }
            return body;
        }

        function drawCharts(plots) {
            for (const [target, figure] of Object.entries(plots)) {
                Plotly.react(target, figure.data, figure.layout);
            }
        }

        function drawMap(snapshot) {
            const view = snapshot.view;
            if (!view) {
                return;
            }
            const map = L.map('mapa').setView([view.center.lat, view.center.lon], view.zoom);
            const tiles = snapshot.tile_layer;
            L.tileLayer(tiles.url_template, {
                maxZoom: tiles.max_zoom,
                attribution: tiles.attribution
            }).addTo(map);

            for (const marker of snapshot.markers) {
                const icon = L.divIcon({
                    className: marker.icon.class_name,
                    html: marker.icon.html,
                    iconSize: marker.icon.size
                });
                const placed = L.marker([marker.position.lat, marker.position.lon], { icon }).addTo(map);
                if (marker.popup) {
                    placed.bindPopup(marker.popup);
                }
                if (marker.clickable) {
                    placed.on('click', async () => {
                        drawCharts(await getJson(`/api/markers/${marker.id}/select`, { method: 'POST' }));
                    });
                }
            }
        }

        async function start() {
            try {
                drawMap(await getJson('/api/map'));
                drawCharts(await getJson('/api/charts'));
            } catch (error) {
                document.getElementById('mapa').textContent = error.message;
            }
        }

        document.addEventListener('DOMContentLoaded', start);
    </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_without_view_is_left_blank() {
        let draw_map = DASHBOARD_HTML
            .split("function drawMap(snapshot)")
            .nth(1)
            .expect("drawMap is defined");
        let guard = draw_map.find("if (!view)").expect("view guard");
        let first_use = draw_map.find("view.center").expect("view is read");
        assert!(guard < first_use);
    }
}
